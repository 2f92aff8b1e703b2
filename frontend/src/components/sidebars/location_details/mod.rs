//! Read-only panel of the selected location.

use std::rc::Rc;

use yew::prelude::*;

use common::model::config::FrontendConfig;
use common::model::location::MapLocation;

use crate::helpers::{format_lest97, render_notes_markdown};
use crate::services::session::Session;

pub mod bookmarks;
pub mod land_board_button;

use bookmarks::LocationBookmarks;
use land_board_button::LandBoardButton;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationDetailsSidebarProps {
    pub location: MapLocation,
    pub config: Rc<FrontendConfig>,
    pub on_close: Callback<()>,
}

#[function_component(LocationDetailsSidebar)]
pub fn location_details_sidebar(props: &LocationDetailsSidebarProps) -> Html {
    let location = &props.location;
    let coordinate = location.coordinate();
    let logged_in = use_memo((), |_| Session::load().is_logged_in());
    let onclick = props.on_close.reform(|_: MouseEvent| ());

    let notes = Html::from_html_unchecked(AttrValue::from(render_notes_markdown(
        &location.additional_information,
    )));
    let subcategories = location
        .subcategories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <div class="sidebar location-details-sidebar">
            <header class="sidebar-header">
                <h2>{ location.name.clone() }</h2>
                <button type="button" class="icon-button" title="Sulge" {onclick}>
                    <span class="material-icons">{ "close" }</span>
                </button>
            </header>

            <dl class="location-attributes">
                { attribute_row("Kategooria", location.main_category.as_ref().map(|c| c.name.clone())) }
                { attribute_row("Alamkategooriad", Some(subcategories).filter(|s| !s.is_empty())) }
                { attribute_row("Seisukord", location.condition.as_ref().map(|c| c.name.clone())) }
                { attribute_row("Staatus", location.status.as_ref().map(|s| s.name.clone())) }
                { attribute_row("WGS84", Some(coordinate.to_string())) }
                { attribute_row("L-EST97", Some(format_lest97(coordinate))) }
                { attribute_row("Nähtavus", Some(if location.is_public { "Avalik" } else { "Privaatne" }.to_string())) }
            </dl>

            if !location.additional_information.trim().is_empty() {
                <section class="location-notes">{ notes }</section>
            }

            <LandBoardButton {coordinate} />

            if *logged_in {
                <LocationBookmarks
                    key={location.id.clone()}
                    location_id={AttrValue::from(location.id.clone())}
                    config={props.config.clone()}
                />
            }
        </div>
    }
}

fn attribute_row(label: &'static str, value: Option<String>) -> Html {
    match value {
        Some(value) => html! {
            <>
                <dt>{ label }</dt>
                <dd>{ value }</dd>
            </>
        },
        None => html! {},
    }
}
