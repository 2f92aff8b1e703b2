//! # Front-end Configuration Service
//!
//! Exposes the runtime configuration of the map front end: the location API
//! base URL, the initial view and the tile sources. The value is built once at
//! start-up from the environment and shared as `web::Data<FrontendConfig>`.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/config";

/// Routes under `/api/config`.
///
/// *   **`GET /api/config`**: returns the `FrontendConfig` as JSON.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::model::config::FrontendConfig;
    use common::model::coordinate::Coordinate;

    use super::*;

    #[actix_web::test]
    async fn serves_the_shared_config() {
        let config = FrontendConfig {
            api_url: "https://kaart.example".to_string(),
            initial_center: Coordinate::new(59.437, 24.7536),
            initial_zoom: 12,
            ..FrontendConfig::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["api_url"], "https://kaart.example");
        assert_eq!(body["initial_zoom"], 12);
        let served: FrontendConfig = serde_json::from_value(body).unwrap();
        assert_eq!(served, config);
    }
}
