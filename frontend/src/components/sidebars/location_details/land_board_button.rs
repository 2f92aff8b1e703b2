use yew::prelude::*;

use common::model::coordinate::Coordinate;

use crate::helpers::{land_board_photo_url, open_in_new_tab};

#[derive(Properties, PartialEq, Clone)]
pub struct LandBoardButtonProps {
    pub coordinate: Coordinate,
}

/// Opens the land board's photo archive at the location in a new tab.
#[function_component(LandBoardButton)]
pub fn land_board_button(props: &LandBoardButtonProps) -> Html {
    let coordinate = props.coordinate;
    let onclick = Callback::from(move |_: MouseEvent| {
        open_in_new_tab(&land_board_photo_url(coordinate));
    });

    html! {
        <button type="button" class="secondary land-board-button" {onclick}>
            <span class="material-icons">{ "photo_library" }</span>
            { "Maa-ameti fotoladu" }
        </button>
    }
}
