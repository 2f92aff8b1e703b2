//! Map synchronization controller.
//!
//! Keeps the four vector layers and the selection interaction of the map widget
//! consistent with state owned by the App, and turns raw pointer input into
//! `MapEvent`s. Each `sync_*` method is one reactive rule: it is idempotent and
//! may be re-applied whenever its input changes, in any order relative to the
//! others.
//!
//! The controller holds no browser handles; the `MapView` component feeds it
//! props and pointer positions and renders whatever it holds.

use common::model::config::FrontendConfig;
use common::model::coordinate::Coordinate;
use common::model::location::MapLocation;
use common::projection::to_lon_lat;

use crate::components::sidebars::SidebarContent;

use super::events::MapEvent;
use super::features::{in_progress_feature, location_feature, Feature, FeatureSource};
use super::layers::{draw_order, LayerKind, LayerVisibility, VectorLayer};
use super::viewport::{pixel_distance, HIT_TOLERANCE};
use super::widget::MapWidget;

#[derive(Debug, Clone, PartialEq)]
pub struct MapSync {
    private: VectorLayer,
    public: VectorLayer,
    selected: VectorLayer,
    in_progress: VectorLayer,
    widget: Option<MapWidget>,
}

impl Default for MapSync {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSync {
    pub fn new() -> Self {
        Self {
            private: VectorLayer::private(FeatureSource::new()),
            public: VectorLayer::public(FeatureSource::new()),
            selected: VectorLayer::selected(FeatureSource::new()),
            in_progress: VectorLayer::in_progress(FeatureSource::new()),
            widget: None,
        }
    }

    /// Constructs the widget on `target`. A missing target means the element
    /// is not in the document yet and nothing happens; a second call keeps the
    /// existing widget. Returns whether a widget was created.
    pub fn mount(&mut self, target: Option<&str>, config: &FrontendConfig) -> bool {
        if self.widget.is_some() {
            return false;
        }
        if target.is_none() {
            return false;
        }
        let mut widget = MapWidget::new(config);
        for feature in self.selected.source.features() {
            widget.interaction.push(feature.clone());
        }
        self.widget = Some(widget);
        true
    }

    /// Detaches and releases the widget. Returns whether there was one, so a
    /// repeated call, or one without a prior mount, is a no-op.
    pub fn unmount(&mut self) -> bool {
        self.widget.take().is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.widget.is_some()
    }

    pub fn widget(&self) -> Option<&MapWidget> {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut MapWidget> {
        self.widget.as_mut()
    }

    pub fn layer(&self, kind: LayerKind) -> &VectorLayer {
        match kind {
            LayerKind::Private => &self.private,
            LayerKind::Public => &self.public,
            LayerKind::Selected => &self.selected,
            LayerKind::InProgress => &self.in_progress,
        }
    }

    /// Vector layers bottom to top.
    pub fn layers_in_draw_order(&self) -> [&VectorLayer; 4] {
        draw_order().map(|kind| self.layer(kind))
    }

    /// Replaces every displayed marker with `locations`, each routed to the
    /// public or private layer by its visibility flag. Selection and the
    /// in-progress pin are dropped too.
    pub fn sync_locations(&mut self, locations: &[MapLocation]) {
        self.public.source.clear();
        self.private.source.clear();
        self.selected.source.clear();
        self.in_progress.source.clear();

        for location in locations {
            let feature = location_feature(location);
            if location.is_public {
                self.public.source.add_feature(feature);
            } else {
                self.private.source.add_feature(feature);
            }
        }
    }

    /// Mirrors the externally selected location into the selected layer and
    /// the widget's selection interaction.
    pub fn sync_selected_location(&mut self, selected: Option<&MapLocation>) {
        self.selected.source.clear();
        if let Some(widget) = self.widget.as_mut() {
            widget.interaction.clear();
        }

        if let Some(location) = selected {
            let feature = location_feature(location);
            if let Some(widget) = self.widget.as_mut() {
                widget.interaction.push(feature.clone());
            }
            self.selected.source.add_feature(feature);
        }
    }

    /// Leaving the add-new-location panel abandons an unsaved pin.
    pub fn sync_sidebar_content(&mut self, content: SidebarContent) {
        if content != SidebarContent::AddNewLocation {
            self.in_progress.source.clear();
        }
    }

    /// Places the in-progress pin on the last clicked coordinate while the user
    /// is picking one.
    pub fn sync_map_click(&mut self, click: Option<Coordinate>, selection_mode: bool) {
        if let (Some(coordinate), true) = (click, selection_mode) {
            self.in_progress.source.clear();
            self.in_progress.source.add_feature(in_progress_feature(coordinate));
        }
    }

    /// Events of a single click at `projected` (EPSG:3857).
    pub fn click_events(&self, projected: [f64; 2]) -> Vec<MapEvent> {
        vec![
            MapEvent::CoordinatePicked(Coordinate::from_lon_lat(to_lon_lat(projected))),
            MapEvent::PhotoCleared,
        ]
    }

    /// Event of a double click at `projected` (EPSG:3857).
    pub fn double_click_event(&self, projected: [f64; 2]) -> MapEvent {
        MapEvent::PhotoRequested(Coordinate::from_lon_lat(to_lon_lat(projected)))
    }

    /// Translates a click hit into `LocationSelected` when it would change the
    /// selection. The interaction is left as it is; it follows only once the
    /// owner passes the new selection back through `sync_selected_location`.
    pub fn handle_select(&self, hit: Option<Feature>) -> Option<MapEvent> {
        let event = self.widget.as_ref()?.interaction.propose(hit)?;
        let location = event
            .selected
            .first()
            .filter(|feature| !feature.is_in_progress())
            .and_then(|feature| feature.location().cloned());
        let current = self.selected.source.features().first().and_then(Feature::location);
        if location.as_ref().map(|l| &l.id) == current.map(|l| &l.id) {
            return None;
        }
        Some(MapEvent::LocationSelected(location))
    }

    /// Topmost visible marker under `pixel`, searching layers top to bottom.
    pub fn hit_test(&self, pixel: [f64; 2], visibility: &LayerVisibility) -> Option<Feature> {
        let viewport = &self.widget.as_ref()?.viewport;
        draw_order()
            .into_iter()
            .rev()
            .filter(|kind| visibility.shows(*kind))
            .map(|kind| self.layer(kind))
            .find_map(|layer| {
                let tolerance = layer.style.radius.max(HIT_TOLERANCE);
                layer.source.features().iter().rev().find(|feature| {
                    pixel_distance(viewport.projected_to_pixel(feature.projected()), pixel) <= tolerance
                })
            })
            .cloned()
    }
}
