use serde::{Deserialize, Serialize};

use crate::model::attributes::{LocationCategory, LocationCondition, LocationStatus};
use crate::model::coordinate::Coordinate;

/// A point of interest as served by the location API.
///
/// Records are created by the backend when the new-location form is submitted
/// and are read-only on the client afterwards. `is_public` decides whether the
/// location is drawn on the public or on the private layer of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLocation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub main_category: Option<LocationCategory>,
    #[serde(default)]
    pub subcategories: Vec<LocationCategory>,
    #[serde(default)]
    pub condition: Option<LocationCondition>,
    #[serde(default)]
    pub status: Option<LocationStatus>,
    #[serde(default)]
    pub additional_information: String,
    #[serde(default)]
    pub created_by_user_uuid: Option<String>,
}

impl MapLocation {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Body of `POST /api/locations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCreateDto {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub is_public: bool,
    pub main_category_id: i64,
    pub subcategory_ids: Vec<i64>,
    pub condition_id: Option<i64>,
    pub status_id: Option<i64>,
    pub additional_information: String,
}
