//! Properties of the `MapView` component.
//!
//! Everything the map displays is owned by the App and handed down here; the
//! map reports back only through `on_event`.

use std::rc::Rc;

use yew::prelude::*;

use common::model::config::FrontendConfig;
use common::model::coordinate::Coordinate;
use common::model::location::MapLocation;

use crate::components::sidebars::SidebarContent;

use super::events::MapEvent;
use super::layers::LayerVisibility;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    /// Locations of the active map scope, public and private mixed.
    pub locations: Rc<Vec<MapLocation>>,

    /// The globally selected location, mirrored into the selected layer.
    #[prop_or_default]
    pub selected_location: Option<MapLocation>,

    /// Last picked coordinate, shown as the in-progress pin while
    /// `coordinate_selection_mode` is on.
    #[prop_or_default]
    pub map_click_coords: Option<Coordinate>,

    #[prop_or_default]
    pub coordinate_selection_mode: bool,

    #[prop_or_default]
    pub sidebar_content: SidebarContent,

    pub layers: LayerVisibility,

    /// Initial view and tile sources. Read once, when the widget is mounted.
    pub config: Rc<FrontendConfig>,

    pub on_event: Callback<MapEvent>,
}
