use common::model::config::FrontendConfig;
use common::model::coordinate::Coordinate;
use common::model::location::MapLocation;

use crate::components::map::{LayerVisibility, MapEvent};
use crate::services::location_service::MapScope;

/// Every change to the App state goes through one of these.
pub enum Msg {
    ConfigLoaded(FrontendConfig),
    LoadLocations,
    LocationsLoaded(MapScope, Vec<MapLocation>),
    SetScope(MapScope),
    Map(MapEvent),
    OpenNewLocation,
    CloseSidebar,
    SetSelectionMode(bool),
    CoordinateTyped(Coordinate),
    LocationCreated(MapLocation, bool),
    SetLayers(LayerVisibility),
    CloseObliquePhoto,
}
