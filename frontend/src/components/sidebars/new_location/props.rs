use std::rc::Rc;

use yew::prelude::*;

use common::model::config::FrontendConfig;
use common::model::coordinate::Coordinate;
use common::model::location::MapLocation;

#[derive(Properties, PartialEq, Clone)]
pub struct NewLocationSidebarProps {
    pub config: Rc<FrontendConfig>,

    /// Coordinate last picked on the map; copied into the form when it changes.
    #[prop_or_default]
    pub map_click_coords: Option<Coordinate>,

    #[prop_or_default]
    pub coordinate_selection_mode: bool,

    /// Asks the App to switch map click selection on or off.
    pub on_selection_mode: Callback<bool>,

    /// A valid coordinate typed by hand, to be shown as the map pin.
    pub on_coordinate_typed: Callback<Coordinate>,

    /// The created location and whether it should become the selection.
    pub on_created: Callback<(MapLocation, bool)>,

    pub on_close: Callback<()>,
}
