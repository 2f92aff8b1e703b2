use yew::prelude::*;

use crate::components::layer_selector::LayerSelector;
use crate::components::map::MapView;
use crate::components::oblique_photo::ObliquePhotoPanel;
use crate::components::side_sheet::SideSheet;
use crate::components::sidebars::location_details::LocationDetailsSidebar;
use crate::components::sidebars::new_location::NewLocationSidebar;
use crate::components::sidebars::SidebarContent;
use crate::services::location_service::MapScope;

use super::messages::Msg;
use super::App;

pub fn view(app: &App, ctx: &Context<App>) -> Html {
    let state = &app.state;
    let link = ctx.link();

    if !state.config_loaded {
        return html! { <div class="app-loading">{ "Laen kaarti..." }</div> };
    }

    html! {
        <div class="app">
            { toolbar(app, ctx) }
            <main class="map-page">
                <MapView
                    locations={state.locations.clone()}
                    selected_location={state.selected_location.clone()}
                    map_click_coords={state.map_click_coords}
                    coordinate_selection_mode={state.coordinate_selection_mode}
                    sidebar_content={state.sidebar_content}
                    layers={state.layers.clone()}
                    config={state.config.clone()}
                    on_event={link.callback(Msg::Map)}
                />
                <LayerSelector
                    layers={state.layers.clone()}
                    base_layers={state.config.base_layers.clone()}
                    overlay={state.config.land_registry_overlay.clone()}
                    on_change={link.callback(Msg::SetLayers)}
                />
                if let Some(coordinate) = state.oblique_photo_coords {
                    <ObliquePhotoPanel {coordinate} on_close={link.callback(|_| Msg::CloseObliquePhoto)} />
                }
                <SideSheet open={state.sidebar_content != SidebarContent::Nothing}>
                    { sidebar(app, ctx) }
                </SideSheet>
            </main>
        </div>
    }
}

fn toolbar(app: &App, ctx: &Context<App>) -> Html {
    let state = &app.state;
    let link = ctx.link();
    let scope_button = |scope: MapScope, label: &'static str, enabled: bool| {
        let class = classes!("scope-button", (state.scope == scope).then_some("active"));
        html! {
            <button type="button" {class} disabled={!enabled}
                onclick={link.callback(move |_| Msg::SetScope(scope))}>
                { label }
            </button>
        }
    };

    html! {
        <header class="app-toolbar">
            <h1>{ "Kaardirakendus" }</h1>
            <nav class="scope-switch">
                { scope_button(MapScope::Public, "Avalik kaart", true) }
                { scope_button(MapScope::Private, "Minu kaart", state.logged_in) }
            </nav>
            if state.logged_in {
                <button type="button" class="primary"
                    onclick={link.callback(|_| Msg::OpenNewLocation)}>
                    <span class="material-icons">{ "add_location" }</span>
                    { "Lisa asukoht" }
                </button>
            }
        </header>
    }
}

fn sidebar(app: &App, ctx: &Context<App>) -> Html {
    let state = &app.state;
    let link = ctx.link();
    match (state.sidebar_content, &state.selected_location) {
        (SidebarContent::LocationDetails, Some(location)) => html! {
            <LocationDetailsSidebar
                location={location.clone()}
                config={state.config.clone()}
                on_close={link.callback(|_| Msg::CloseSidebar)}
            />
        },
        (SidebarContent::AddNewLocation, _) => html! {
            <NewLocationSidebar
                config={state.config.clone()}
                map_click_coords={state.map_click_coords}
                coordinate_selection_mode={state.coordinate_selection_mode}
                on_selection_mode={link.callback(Msg::SetSelectionMode)}
                on_coordinate_typed={link.callback(Msg::CoordinateTyped)}
                on_created={link.callback(|(location, select)| Msg::LocationCreated(location, select))}
                on_close={link.callback(|_| Msg::CloseSidebar)}
            />
        },
        _ => html! {},
    }
}
