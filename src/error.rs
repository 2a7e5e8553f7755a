//!
//! # Application Error Handling
//!
//! Defines the custom error type `AppError` used throughout the application.
//! Every handler returns `Result<_, AppError>`, and the `ResponseError`
//! implementation turns each variant into the matching HTTP status with the
//! JSON envelope `{"message": "..."}` that the API speaks everywhere.
//!
//! Server-side failures (`Database`, `Internal`) carry their detail only into
//! the log; the client always receives the generic "Internal server error"
//! body.

use actix_web::{error::JsonPayloadError, error::ResponseError, HttpRequest, HttpResponse};
use serde_json::json;
use std::fmt;

/// All error conditions the API can answer with.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or invalid input, including failed credential checks (HTTP 400).
    BadRequest(String),
    /// A uniqueness constraint was violated (HTTP 400).
    Conflict(String),
    /// Authentication is required or the identity cannot be resolved (HTTP 401).
    Unauthorized(String),
    /// A presented token failed verification (HTTP 403).
    Forbidden(String),
    /// No route or record matched (HTTP 404).
    NotFound(String),
    /// Database failure (HTTP 500). The message is logged, never sent.
    Database(String),
    /// Any other unexpected server-side failure (HTTP 500). Logged, never sent.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "message": msg
            })),
            AppError::Conflict(msg) => HttpResponse::BadRequest().json(json!({
                "message": msg
            })),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "message": msg
            })),
            AppError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({
                "message": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "message": msg
            })),
            // 500-class errors keep their detail out of the response body.
            AppError::Database(msg) | AppError::Internal(msg) => {
                log::error!("Unhandled error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "message": "Internal server error"
                }))
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` maps to `NotFound`; anything else is a database failure.
/// Uniqueness conflicts are handled closer to the query site, where the
/// entity-specific message is known.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::Database(error.to_string()),
        }
    }
}

/// Normalizes actix's JSON payload failures (syntax errors, wrong field types)
/// into the API's 400 envelope instead of the framework default body.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", err);
    AppError::BadRequest("Invalid request body".into()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::BadRequest("All fields are required".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::Conflict("Email already exists".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::Unauthorized("Access token required".into());
        assert_eq!(error.error_response().status(), 401);

        let error = AppError::Forbidden("Invalid or expired token".into());
        assert_eq!(error.error_response().status(), 403);

        let error = AppError::NotFound("Route not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::Internal("boom".into());
        assert_eq!(error.error_response().status(), 500);

        let error = AppError::Database("connection reset".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[test]
    fn test_database_error_from_sqlx() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(error.error_response().status(), 404);
    }
}
