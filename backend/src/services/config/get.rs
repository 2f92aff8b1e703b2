use actix_web::{web, HttpResponse, Responder};
use common::model::config::FrontendConfig;

/// Handler for `GET /api/config`.
pub async fn process(config: web::Data<FrontendConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
