//! The App state container.
//!
//! Every piece of state the map page shares between the map and the sidebars
//! lives here. `update` is the only caller of the mutating methods, which
//! keeps the cross-cutting rules in one place:
//! - selecting a location opens its details, deselecting closes them;
//! - map clicks only count as picked coordinates while selection mode is on;
//! - leaving the add-new panel ends selection mode.

use std::rc::Rc;

use common::model::config::FrontendConfig;
use common::model::coordinate::Coordinate;
use common::model::location::MapLocation;

use crate::components::map::{LayerVisibility, MapEvent};
use crate::components::sidebars::SidebarContent;
use crate::services::location_service::MapScope;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub scope: MapScope,
    pub locations: Rc<Vec<MapLocation>>,
    pub selected_location: Option<MapLocation>,
    pub map_click_coords: Option<Coordinate>,
    pub coordinate_selection_mode: bool,
    pub sidebar_content: SidebarContent,
    pub oblique_photo_coords: Option<Coordinate>,
    pub layers: LayerVisibility,
    pub config: Rc<FrontendConfig>,
    /// Whether `/api/config` has been answered (or given up on).
    pub config_loaded: bool,
    pub logged_in: bool,
}

impl AppState {
    pub fn new(config: FrontendConfig, logged_in: bool) -> Self {
        let layers = LayerVisibility::with_base(first_base_layer(&config));
        Self {
            scope: MapScope::default(),
            locations: Rc::new(Vec::new()),
            selected_location: None,
            map_click_coords: None,
            coordinate_selection_mode: false,
            sidebar_content: SidebarContent::Nothing,
            oblique_photo_coords: None,
            layers,
            config: Rc::new(config),
            config_loaded: false,
            logged_in,
        }
    }

    pub fn set_config(&mut self, config: FrontendConfig) {
        if !config.base_layers.iter().any(|l| l.id == self.layers.base_layer_id) {
            self.layers.base_layer_id = first_base_layer(&config).to_string();
        }
        self.config = Rc::new(config);
        self.config_loaded = true;
    }

    /// Takes a loaded location list. Responses for a scope that is no longer
    /// shown are dropped; returns whether the list was applied.
    pub fn set_locations(&mut self, scope: MapScope, locations: Vec<MapLocation>) -> bool {
        if scope != self.scope {
            return false;
        }
        let still_listed = self
            .selected_location
            .as_ref()
            .is_some_and(|selected| locations.iter().any(|l| l.id == selected.id));
        if !still_listed {
            self.select_location(None);
        }
        self.locations = Rc::new(locations);
        true
    }

    /// Switches between the public and the private map. Returns whether the
    /// locations have to be reloaded.
    pub fn set_scope(&mut self, scope: MapScope) -> bool {
        if scope == self.scope || (scope == MapScope::Private && !self.logged_in) {
            return false;
        }
        self.scope = scope;
        self.select_location(None);
        self.locations = Rc::new(Vec::new());
        true
    }

    pub fn select_location(&mut self, location: Option<MapLocation>) {
        match location {
            Some(location) => {
                self.selected_location = Some(location);
                self.set_sidebar(SidebarContent::LocationDetails);
            }
            None => {
                self.selected_location = None;
                if self.sidebar_content == SidebarContent::LocationDetails {
                    self.set_sidebar(SidebarContent::Nothing);
                }
            }
        }
    }

    pub fn set_sidebar(&mut self, content: SidebarContent) {
        if content != SidebarContent::AddNewLocation {
            self.coordinate_selection_mode = false;
            self.map_click_coords = None;
        }
        self.sidebar_content = content;
    }

    /// Opens the add-new panel with map picking armed.
    pub fn open_new_location(&mut self) {
        self.selected_location = None;
        self.map_click_coords = None;
        self.set_sidebar(SidebarContent::AddNewLocation);
        self.coordinate_selection_mode = true;
    }

    pub fn close_sidebar(&mut self) {
        self.selected_location = None;
        self.set_sidebar(SidebarContent::Nothing);
    }

    pub fn set_selection_mode(&mut self, on: bool) {
        self.coordinate_selection_mode = on && self.sidebar_content == SidebarContent::AddNewLocation;
    }

    /// A coordinate typed into the form counts like a map pick. The map pin
    /// follows it only while selection mode is on.
    pub fn type_coordinate(&mut self, coordinate: Coordinate) {
        if self.sidebar_content == SidebarContent::AddNewLocation {
            self.map_click_coords = Some(coordinate);
        }
    }

    /// Shows a freshly created location without reloading the list and
    /// optionally selects it.
    pub fn display_created(&mut self, location: MapLocation, select: bool) {
        Rc::make_mut(&mut self.locations).push(location.clone());
        self.map_click_coords = None;
        if select {
            self.select_location(Some(location));
        }
    }

    pub fn handle_map_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::CoordinatePicked(coordinate) => {
                if self.coordinate_selection_mode {
                    self.map_click_coords = Some(coordinate);
                }
            }
            MapEvent::PhotoRequested(coordinate) => self.oblique_photo_coords = Some(coordinate),
            MapEvent::PhotoCleared => self.oblique_photo_coords = None,
            MapEvent::LocationSelected(location) => {
                // While picking a coordinate, clicks on markers must not leave the form.
                if self.coordinate_selection_mode {
                    return;
                }
                self.select_location(location);
            }
        }
    }

    pub fn set_layers(&mut self, layers: LayerVisibility) {
        self.layers = layers;
    }
}

fn first_base_layer(config: &FrontendConfig) -> &str {
    config.base_layers.first().map(|l| l.id.as_str()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use common::projection::from_lon_lat;
    use yew::Callback;

    use super::*;
    use crate::components::map::features::sample_location;
    use crate::components::map::layers::LayerKind;
    use crate::components::map::widget::MAP_TARGET_ID;
    use crate::components::map::{MapView, MapViewProps};

    fn state() -> AppState {
        AppState::new(FrontendConfig::default(), true)
    }

    #[test]
    fn selecting_opens_details_and_deselecting_closes_them() {
        let mut state = state();
        let location = sample_location("a", true);

        state.handle_map_event(MapEvent::LocationSelected(Some(location.clone())));
        assert_eq!(state.sidebar_content, SidebarContent::LocationDetails);
        assert_eq!(state.selected_location, Some(location));

        state.handle_map_event(MapEvent::LocationSelected(None));
        assert_eq!(state.sidebar_content, SidebarContent::Nothing);
        assert_eq!(state.selected_location, None);
    }

    #[test]
    fn clicks_are_picked_only_in_selection_mode() {
        let mut state = state();
        state.handle_map_event(MapEvent::CoordinatePicked(Coordinate::new(58.3, 24.7)));
        assert_eq!(state.map_click_coords, None);

        state.open_new_location();
        state.handle_map_event(MapEvent::CoordinatePicked(Coordinate::new(58.3, 24.7)));
        assert_eq!(state.map_click_coords, Some(Coordinate::new(58.3, 24.7)));
    }

    #[test]
    fn marker_clicks_while_picking_keep_the_form_open() {
        let mut state = state();
        state.open_new_location();

        state.handle_map_event(MapEvent::LocationSelected(Some(sample_location("a", true))));

        assert_eq!(state.sidebar_content, SidebarContent::AddNewLocation);
        assert_eq!(state.selected_location, None);
    }

    #[test]
    fn leaving_add_new_ends_selection_mode() {
        let mut state = state();
        state.open_new_location();
        state.type_coordinate(Coordinate::new(58.3, 24.7));

        state.close_sidebar();

        assert!(!state.coordinate_selection_mode);
        assert_eq!(state.map_click_coords, None);
        assert_eq!(state.sidebar_content, SidebarContent::Nothing);
    }

    #[test]
    fn selection_mode_needs_the_add_new_panel() {
        let mut state = state();
        state.set_selection_mode(true);
        assert!(!state.coordinate_selection_mode);
    }

    #[test]
    fn created_location_is_appended_and_optionally_selected() {
        let mut state = state();
        state.set_locations(MapScope::Public, vec![sample_location("a", true)]);
        state.open_new_location();

        state.display_created(sample_location("b", false), false);
        assert_eq!(state.locations.len(), 2);
        assert_eq!(state.sidebar_content, SidebarContent::AddNewLocation);

        state.display_created(sample_location("c", false), true);
        assert_eq!(state.locations.len(), 3);
        assert_eq!(state.selected_location.as_ref().map(|l| l.id.as_str()), Some("c"));
        assert_eq!(state.sidebar_content, SidebarContent::LocationDetails);
        assert!(!state.coordinate_selection_mode);
    }

    #[test]
    fn stale_scope_responses_are_dropped() {
        let mut state = state();
        assert!(state.set_scope(MapScope::Private));

        assert!(!state.set_locations(MapScope::Public, vec![sample_location("a", true)]));
        assert!(state.locations.is_empty());
        assert!(state.set_locations(MapScope::Private, vec![sample_location("b", false)]));
        assert_eq!(state.locations.len(), 1);
    }

    #[test]
    fn private_map_needs_login() {
        let mut state = AppState::new(FrontendConfig::default(), false);
        assert!(!state.set_scope(MapScope::Private));
        assert_eq!(state.scope, MapScope::Public);
    }

    #[test]
    fn reload_without_the_selected_location_deselects() {
        let mut state = state();
        let a = sample_location("a", true);
        state.set_locations(MapScope::Public, vec![a.clone()]);
        state.select_location(Some(a.clone()));

        state.set_locations(MapScope::Public, vec![a]);
        assert!(state.selected_location.is_some());

        state.set_locations(MapScope::Public, vec![sample_location("b", true)]);
        assert_eq!(state.selected_location, None);
        assert_eq!(state.sidebar_content, SidebarContent::Nothing);
    }

    #[test]
    fn double_click_offers_photos_and_click_clears_them() {
        let mut state = state();
        state.handle_map_event(MapEvent::PhotoRequested(Coordinate::new(58.3, 24.7)));
        assert_eq!(state.oblique_photo_coords, Some(Coordinate::new(58.3, 24.7)));
        state.handle_map_event(MapEvent::PhotoCleared);
        assert_eq!(state.oblique_photo_coords, None);
    }

    #[test]
    fn unknown_base_layer_is_replaced_on_config_load() {
        let mut state = state();
        state.layers.base_layer_id = "gone".to_string();
        state.set_config(FrontendConfig::default());
        assert_eq!(state.layers.base_layer_id, "osm");
        assert!(state.config_loaded);
    }

    fn map_props(state: &AppState) -> MapViewProps {
        MapViewProps {
            locations: state.locations.clone(),
            selected_location: state.selected_location.clone(),
            map_click_coords: state.map_click_coords,
            coordinate_selection_mode: state.coordinate_selection_mode,
            sidebar_content: state.sidebar_content,
            layers: state.layers.clone(),
            config: state.config.clone(),
            on_event: Callback::noop(),
        }
    }

    fn mounted_map(state: &AppState) -> MapView {
        let props = map_props(state);
        let mut map = MapView::new(&props);
        map.sync.mount(Some(MAP_TARGET_ID), &props.config);
        map.resize(800.0, 600.0);
        map
    }

    /// Changes the state and hands the map the new props, like a re-render.
    fn step(state: &mut AppState, map: &mut MapView, change: impl FnOnce(&mut AppState)) {
        let old = map_props(state);
        change(state);
        map.apply_props(&old, &map_props(state));
    }

    fn click_marker(state: &mut AppState, map: &mut MapView, location: &MapLocation) -> Vec<MapEvent> {
        let pixel = map
            .sync
            .widget()
            .unwrap()
            .viewport
            .projected_to_pixel(from_lon_lat(location.coordinate().as_lon_lat()));
        map.press(pixel);
        let events = map.release(pixel, &state.layers);
        step(state, map, |state| {
            for event in events.clone() {
                state.handle_map_event(event);
            }
        });
        events
    }

    fn pin(map: &MapView) -> Option<Coordinate> {
        let pins = map.sync.layer(LayerKind::InProgress).source.features();
        assert!(pins.len() <= 1);
        pins.first().map(|feature| feature.coordinate)
    }

    #[test]
    fn marker_clicked_while_picking_is_selectable_after_cancel() {
        let location = sample_location("a", true);
        let mut state = state();
        state.set_locations(MapScope::default(), vec![location.clone()]);
        let mut map = mounted_map(&state);

        step(&mut state, &mut map, AppState::open_new_location);
        click_marker(&mut state, &mut map, &location);
        assert_eq!(state.selected_location, None);
        assert!(map.sync.widget().unwrap().interaction.features().is_empty());

        step(&mut state, &mut map, AppState::close_sidebar);
        let events = click_marker(&mut state, &mut map, &location);

        assert!(events.contains(&MapEvent::LocationSelected(Some(location.clone()))));
        assert_eq!(state.selected_location, Some(location));
        assert_eq!(state.sidebar_content, SidebarContent::LocationDetails);
        assert_eq!(map.sync.widget().unwrap().interaction.features().len(), 1);
        assert!(map.sync.layer(LayerKind::Selected).source.contains_location("a"));
    }

    #[test]
    fn typed_coordinate_moves_the_pin_only_while_picking() {
        let mut state = state();
        let mut map = mounted_map(&state);

        step(&mut state, &mut map, AppState::open_new_location);
        step(&mut state, &mut map, |s| s.type_coordinate(Coordinate::new(58.3, 24.7)));
        assert_eq!(pin(&map), Some(Coordinate::new(58.3, 24.7)));

        step(&mut state, &mut map, |s| s.set_selection_mode(false));
        step(&mut state, &mut map, |s| s.type_coordinate(Coordinate::new(59.0, 25.0)));
        assert_eq!(state.map_click_coords, Some(Coordinate::new(59.0, 25.0)));
        assert_eq!(pin(&map), Some(Coordinate::new(58.3, 24.7)));

        step(&mut state, &mut map, |s| s.set_selection_mode(true));
        assert_eq!(pin(&map), Some(Coordinate::new(59.0, 25.0)));
    }
}
