//! Server settings read from the environment.
//!
//! | variable           | default     |
//! |--------------------|-------------|
//! | `MAP_HOST`         | `127.0.0.1` |
//! | `MAP_PORT`         | `8080`      |
//! | `MAP_OPEN_BROWSER` | `true`      |
//! | `MAP_API_URL`      | same origin |
//! | `MAP_INITIAL_LAT`  | `58.6`      |
//! | `MAP_INITIAL_LON`  | `25.0`      |
//! | `MAP_INITIAL_ZOOM` | `8`         |
//!
//! Values that cannot be deserialized make the whole environment fall back to
//! defaults. Values out of range are dropped one by one. Both are logged.

use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use common::model::config::FrontendConfig;

/// `MAP_*` variables as they appear in the environment, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct EnvSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub open_browser: Option<bool>,
    pub api_url: Option<String>,
    pub initial_lat: Option<f64>,
    pub initial_lon: Option<f64>,
    pub initial_zoom: Option<u8>,
}

impl EnvSettings {
    /// Reads the process environment, or `vars` in its place when given.
    pub fn load(vars: Option<HashMap<String, String>>) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("MAP")
                    .ignore_empty(true)
                    .source(vars),
            )
            .build()
            .context("Failed to read MAP_* variables")?;

        settings
            .try_deserialize::<EnvSettings>()
            .context("Failed to deserialize MAP_* variables")
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("MAP_{key}={value} must be between {min} and {max}")]
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Served to the front end at `GET /api/config`.
    pub frontend: FrontendConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            frontend: FrontendConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let settings = EnvSettings::load(None).unwrap_or_else(|err| {
            log::warn!("{:#}; using defaults", err);
            EnvSettings::default()
        });
        let (config, rejected) = Self::from_settings(settings);
        for err in rejected {
            log::warn!("Ignoring {}", err);
        }
        config
    }

    /// Applies `settings` over the defaults, returning every value that was
    /// left out because it is out of range.
    pub fn from_settings(settings: EnvSettings) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(host) = settings.host.map(|h| h.trim().to_string()) {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Some(port) = settings.port {
            config.port = port;
        }
        if let Some(open_browser) = settings.open_browser {
            config.open_browser = open_browser;
        }
        if let Some(api_url) = settings.api_url {
            config.frontend.api_url = api_url.trim().trim_end_matches('/').to_string();
        }

        let frontend = &mut config.frontend;
        if let Some(lat) = settings.initial_lat {
            match in_range("INITIAL_LAT", lat, -90.0, 90.0) {
                Ok(lat) => frontend.initial_center.lat = lat,
                Err(err) => rejected.push(err),
            }
        }
        if let Some(lon) = settings.initial_lon {
            match in_range("INITIAL_LON", lon, -180.0, 180.0) {
                Ok(lon) => frontend.initial_center.lon = lon,
                Err(err) => rejected.push(err),
            }
        }
        if let Some(zoom) = settings.initial_zoom {
            match in_range("INITIAL_ZOOM", f64::from(zoom), 3.0, 19.0) {
                Ok(_) => frontend.initial_zoom = zoom,
                Err(err) => rejected.push(err),
            }
        }

        (config, rejected)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn in_range(key: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ConfigError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        })
    }
}
