//! The map widget instance: view state, raster layers and the built-in
//! selection interaction.

use common::model::config::FrontendConfig;
use common::projection::from_lon_lat;

use super::features::Feature;
use super::layers::TileLayer;
use super::viewport::Viewport;

/// Id of the element the map is rendered into.
pub const MAP_TARGET_ID: &str = "map-element";

/// The selection a click would make.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectEvent {
    pub selected: Vec<Feature>,
}

/// Single-feature click selection. The selected set mirrors the owner's
/// selection and is only written through `clear` and `push`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectInteraction {
    features: Vec<Feature>,
}

impl SelectInteraction {
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn clear(&mut self) {
        self.features.clear();
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// What a click that hit `hit` (or nothing) would select, or `None` when
    /// that is already the selection.
    pub fn propose(&self, hit: Option<Feature>) -> Option<SelectEvent> {
        let unchanged = match &hit {
            Some(feature) => self.features.len() == 1 && self.features[0].same_marker(feature),
            None => self.features.is_empty(),
        };
        if unchanged {
            return None;
        }
        Some(SelectEvent {
            selected: hit.into_iter().collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapWidget {
    pub viewport: Viewport,
    pub base_layers: Vec<TileLayer>,
    pub land_registry: Option<TileLayer>,
    pub interaction: SelectInteraction,
}

impl MapWidget {
    /// Builds the widget with the configured initial view.
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            viewport: Viewport::new(
                from_lon_lat(config.initial_center.as_lon_lat()),
                config.initial_zoom,
            ),
            base_layers: config.base_layers.iter().cloned().map(TileLayer::base).collect(),
            land_registry: config.land_registry_overlay.clone().map(TileLayer::land_registry),
            interaction: SelectInteraction::default(),
        }
    }

    /// The base layer with `id`, or the first configured one.
    pub fn base_layer(&self, id: &str) -> Option<&TileLayer> {
        self.base_layers
            .iter()
            .find(|layer| layer.id() == id)
            .or_else(|| self.base_layers.first())
    }
}

#[cfg(test)]
mod tests {
    use common::model::coordinate::Coordinate;

    use super::*;
    use crate::components::map::features::{in_progress_feature, location_feature, sample_location};

    #[test]
    fn proposing_the_current_selection_changes_nothing() {
        let mut interaction = SelectInteraction::default();
        let feature = location_feature(&sample_location("a", true));

        let event = interaction.propose(Some(feature.clone())).unwrap();
        assert_eq!(event.selected, vec![feature.clone()]);
        assert!(interaction.features().is_empty());

        interaction.push(feature.clone());
        assert_eq!(interaction.propose(Some(feature)), None);
    }

    #[test]
    fn clicking_empty_map_proposes_deselection() {
        let mut interaction = SelectInteraction::default();
        assert_eq!(interaction.propose(None), None);

        let feature = in_progress_feature(Coordinate::new(58.3, 24.7));
        interaction.push(feature.clone());
        let event = interaction.propose(None).unwrap();
        assert!(event.selected.is_empty());
        assert_eq!(interaction.features(), &[feature][..]);
    }

    #[test]
    fn unknown_base_layer_falls_back_to_first() {
        let widget = MapWidget::new(&FrontendConfig::default());
        assert_eq!(widget.base_layer("nope").map(|l| l.id()), Some("osm"));
        assert_eq!(widget.base_layer("orthophoto").map(|l| l.id()), Some("orthophoto"));
    }
}
