//! Loads the runtime configuration served by the host backend.

use gloo_net::http::Request;

use common::model::config::FrontendConfig;

const CONFIG_PATH: &str = "/api/config";

/// Configuration used when `/api/config` is unavailable: the API URL baked in
/// at build time (if any) and the default map setup.
pub fn fallback_config(build_api_url: Option<&str>) -> FrontendConfig {
    FrontendConfig {
        api_url: build_api_url.unwrap_or_default().trim_end_matches('/').to_string(),
        ..FrontendConfig::default()
    }
}

pub async fn load_frontend_config() -> FrontendConfig {
    match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => match response.json::<FrontendConfig>().await {
            Ok(config) => return config,
            Err(err) => gloo_console::warn!(format!("Invalid {} response: {}", CONFIG_PATH, err)),
        },
        Ok(response) => {
            gloo_console::warn!(format!("{} answered {}", CONFIG_PATH, response.status()))
        }
        Err(err) => gloo_console::warn!(format!("{} unavailable: {}", CONFIG_PATH, err)),
    }
    fallback_config(option_env!("MAP_API_URL"))
}
