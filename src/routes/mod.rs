pub mod auth;
pub mod health;
pub mod todos;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::index)
        .service(auth::signup)
        .service(auth::login)
        .service(auth::verify)
        .service(todos::index);
}

/// Catch-all for requests that match no registered route.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("No route matched {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(json!({
        "message": "Route not found"
    }))
}
