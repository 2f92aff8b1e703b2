//! Renderable markers and the collections that back each vector layer.

use common::model::coordinate::Coordinate;
use common::model::location::MapLocation;
use common::projection::from_lon_lat;

/// What a marker stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureKind {
    /// A stored location; selecting the marker selects the location.
    Location(MapLocation),
    /// The pin of a location that is being added and has not been saved.
    InProgress,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub coordinate: Coordinate,
    pub kind: FeatureKind,
}

impl Feature {
    pub fn is_in_progress(&self) -> bool {
        matches!(self.kind, FeatureKind::InProgress)
    }

    pub fn location(&self) -> Option<&MapLocation> {
        match &self.kind {
            FeatureKind::Location(location) => Some(location),
            FeatureKind::InProgress => None,
        }
    }

    /// Position in the map's Web Mercator grid.
    pub fn projected(&self) -> [f64; 2] {
        from_lon_lat(self.coordinate.as_lon_lat())
    }

    /// Two features are the same marker when they carry the same location, or
    /// are both the in-progress pin.
    pub fn same_marker(&self, other: &Feature) -> bool {
        match (&self.kind, &other.kind) {
            (FeatureKind::Location(a), FeatureKind::Location(b)) => a.id == b.id,
            (FeatureKind::InProgress, FeatureKind::InProgress) => true,
            _ => false,
        }
    }
}

/// Marker of a stored location, carrying the location as its payload.
pub fn location_feature(location: &MapLocation) -> Feature {
    Feature {
        coordinate: location.coordinate(),
        kind: FeatureKind::Location(location.clone()),
    }
}

/// Placeholder marker for a coordinate picked while adding a location.
pub fn in_progress_feature(coordinate: Coordinate) -> Feature {
    Feature {
        coordinate,
        kind: FeatureKind::InProgress,
    }
}

/// Backing collection of one vector layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSource {
    features: Vec<Feature>,
}

impl FeatureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn clear(&mut self) {
        self.features.clear();
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains_location(&self, location_id: &str) -> bool {
        self.features
            .iter()
            .any(|f| f.location().is_some_and(|l| l.id == location_id))
    }
}

#[cfg(test)]
pub(crate) fn sample_location(id: &str, is_public: bool) -> MapLocation {
    MapLocation {
        id: id.to_string(),
        name: format!("Asukoht {}", id),
        lat: 58.3,
        lon: 24.7,
        is_public,
        main_category: None,
        subcategories: Vec::new(),
        condition: None,
        status: None,
        additional_information: String::new(),
        created_by_user_uuid: None,
    }
}
