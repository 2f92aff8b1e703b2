use yew::prelude::*;

use common::model::coordinate::Coordinate;

use crate::helpers::{format_lest97, oblique_photo_url, open_in_new_tab};

#[derive(Properties, PartialEq, Clone)]
pub struct ObliquePhotoPanelProps {
    pub coordinate: Coordinate,
    pub on_close: Callback<()>,
}

/// Offer to open oblique aerial photos of a double-clicked point.
#[function_component(ObliquePhotoPanel)]
pub fn oblique_photo_panel(props: &ObliquePhotoPanelProps) -> Html {
    let coordinate = props.coordinate;
    let open = Callback::from(move |_: MouseEvent| {
        open_in_new_tab(&oblique_photo_url(coordinate));
    });
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="oblique-photo-panel">
            <div class="oblique-photo-coordinates">
                <strong>{ "Kaldfotod" }</strong>
                <span>{ coordinate.to_string() }</span>
                <span>{ format_lest97(coordinate) }</span>
            </div>
            <button type="button" class="primary" onclick={open}>{ "Ava kaldfotod" }</button>
            <button type="button" class="icon-button" title="Sulge" onclick={close}>
                <span class="material-icons">{ "close" }</span>
            </button>
        </div>
    }
}
