use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::location_service::LocationService;

use super::messages::Msg;
use super::App;

pub fn update(app: &mut App, ctx: &Context<App>, msg: Msg) -> bool {
    let state = &mut app.state;
    match msg {
        Msg::ConfigLoaded(config) => {
            state.set_config(config);
            ctx.link().send_message(Msg::LoadLocations);
            true
        }
        Msg::LoadLocations => {
            let scope = state.scope;
            let config = state.config.clone();
            let link = ctx.link().clone();
            let token = app.liveness.token();
            spawn_local(async move {
                let locations = LocationService::connect(&config).fetch_locations(scope).await;
                if let (Some(locations), true) = (locations, token.is_alive()) {
                    link.send_message(Msg::LocationsLoaded(scope, locations));
                }
            });
            false
        }
        Msg::LocationsLoaded(scope, locations) => state.set_locations(scope, locations),
        Msg::SetScope(scope) => {
            if state.set_scope(scope) {
                ctx.link().send_message(Msg::LoadLocations);
                true
            } else {
                false
            }
        }
        Msg::Map(event) => {
            state.handle_map_event(event);
            true
        }
        Msg::OpenNewLocation => {
            state.open_new_location();
            true
        }
        Msg::CloseSidebar => {
            state.close_sidebar();
            true
        }
        Msg::SetSelectionMode(on) => {
            state.set_selection_mode(on);
            true
        }
        Msg::CoordinateTyped(coordinate) => {
            state.type_coordinate(coordinate);
            true
        }
        Msg::LocationCreated(location, select) => {
            state.display_created(location, select);
            true
        }
        Msg::SetLayers(layers) => {
            state.set_layers(layers);
            true
        }
        Msg::CloseObliquePhoto => {
            state.oblique_photo_coords = None;
            true
        }
    }
}
