use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

use crate::auth::AuthenticatedUser;

/// Protected landing endpoint for the todos area.
///
/// Returns a per-user greeting. Task CRUD will hang off this path once the
/// client grows a real list view.
#[get("/todos")]
pub async fn index(user: AuthenticatedUser) -> impl Responder {
    let username = &user.0.username;
    HttpResponse::Ok().json(json!({
        "message": format!("Welcome to todos, {}!", username),
        "user": username
    }))
}
