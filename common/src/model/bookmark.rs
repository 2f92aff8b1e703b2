use serde::{Deserialize, Serialize};

/// The kinds of personal bookmark a user can attach to a location.
///
/// The wire names are the ones the bookmark API stores; `label` is what the
/// sidebar shows next to each checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BookmarkType {
    #[serde(rename = "JAA_MEELDE")]
    Remember,
    #[serde(rename = "JUBA_KULASTATUD")]
    Visited,
    #[serde(rename = "SUUR_RISK")]
    HighRisk,
    #[serde(rename = "OSALISELT_AVASTATUD")]
    PartiallyDiscovered,
}

impl BookmarkType {
    pub const ALL: [BookmarkType; 4] = [
        BookmarkType::Remember,
        BookmarkType::Visited,
        BookmarkType::HighRisk,
        BookmarkType::PartiallyDiscovered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkType::Remember => "JAA_MEELDE",
            BookmarkType::Visited => "JUBA_KULASTATUD",
            BookmarkType::HighRisk => "SUUR_RISK",
            BookmarkType::PartiallyDiscovered => "OSALISELT_AVASTATUD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookmarkType::Remember => "Jäta meelde",
            BookmarkType::Visited => "Juba külastatud",
            BookmarkType::HighRisk => "Suur risk",
            BookmarkType::PartiallyDiscovered => "Osaliselt avastatud",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub bookmark_type: BookmarkType,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub created_by_user_uuid: Option<String>,
}
