use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::config::Config;

/// Health check endpoint
///
/// Confirms the API is up and reports the running environment.
#[get("/")]
pub async fn index(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Todolite API is running!",
        "timestamp": Utc::now(),
        "environment": config.environment
    }))
}
