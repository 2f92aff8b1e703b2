mod config;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::thread;
use std::time::Duration;

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                log::warn!("Could not open a browser at {}: {}", url, err);
            }
        });
    }

    if config.frontend.api_url.is_empty() {
        info!("Location API expected on the same origin");
    } else {
        info!("Location API at {}", config.frontend.api_url);
    }
    info!("Server running at {}", url);

    let frontend_config = web::Data::new(config.frontend.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(frontend_config.clone())
            .service(services::config::configure_routes())
            .default_service(web::route().to(services::embedded::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
