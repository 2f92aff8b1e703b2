//! Runtime configuration handed from the host backend to the front end.
//!
//! The backend builds a `FrontendConfig` from its environment and serves it at
//! `GET /api/config`; the front end falls back to `FrontendConfig::default()`
//! when that request fails.

use serde::{Deserialize, Serialize};

use crate::model::coordinate::Coordinate;

/// An XYZ raster tile source.
///
/// `url_template` may contain `{z}`, `{x}` and `{y}`; `{-y}` selects the TMS
/// row order used by the Maa-amet tile service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSourceConfig {
    pub id: String,
    pub name: String,
    pub url_template: String,
    #[serde(default)]
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Base URL of the location REST API, without a trailing slash. Empty means
    /// same origin.
    pub api_url: String,
    pub initial_center: Coordinate,
    pub initial_zoom: u8,
    pub base_layers: Vec<TileSourceConfig>,
    #[serde(default)]
    pub land_registry_overlay: Option<TileSourceConfig>,
}

pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 58.6,
    lon: 25.0,
};
pub const DEFAULT_ZOOM: u8 = 8;

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            initial_center: DEFAULT_CENTER,
            initial_zoom: DEFAULT_ZOOM,
            base_layers: vec![
                TileSourceConfig {
                    id: "osm".to_string(),
                    name: "OpenStreetMap".to_string(),
                    url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                    attribution: "© OpenStreetMap contributors".to_string(),
                },
                TileSourceConfig {
                    id: "orthophoto".to_string(),
                    name: "Ortofoto".to_string(),
                    url_template: "https://tiles.maaamet.ee/tm/tms/1.0.0/foto@GMC/{z}/{x}/{-y}.png"
                        .to_string(),
                    attribution: "© Maa- ja Ruumiamet".to_string(),
                },
            ],
            land_registry_overlay: Some(TileSourceConfig {
                id: "cadastre".to_string(),
                name: "Katastripiirid".to_string(),
                url_template: "https://tiles.maaamet.ee/tm/tms/1.0.0/kataster@GMC/{z}/{x}/{-y}.png"
                    .to_string(),
                attribution: "© Maa- ja Ruumiamet".to_string(),
            }),
        }
    }
}
