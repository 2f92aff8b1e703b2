use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCondition {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationStatus {
    pub id: i64,
    pub name: String,
}

/// Option lists for the attribute selects of the new-location form, as
/// returned by `GET /api/location-attributes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationAttributes {
    #[serde(default)]
    pub categories: Vec<LocationCategory>,
    #[serde(default)]
    pub conditions: Vec<LocationCondition>,
    #[serde(default)]
    pub statuses: Vec<LocationStatus>,
}
