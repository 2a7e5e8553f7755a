pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::UserProfile;

// Re-export the pieces handlers and the app factory reach for.
pub use extractors::AuthenticatedUser;
pub use middleware::RequireAuth;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

lazy_static! {
    // Non-whitespace local part and domain, at least one dot in the domain.
    static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Payload for `POST /signup`.
///
/// Fields are optional so that an absent field and an empty one validate to
/// the same "All fields are required" answer instead of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// A signup payload that passed validation. Borrows from the request.
#[derive(Debug, Clone, Copy)]
pub struct SignupData<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl SignupRequest {
    /// Runs the signup rules in order; the first failing rule decides the
    /// client-facing message.
    ///
    /// Username and email are validated in trimmed form, which is also the
    /// form the store persists. Passwords are taken verbatim.
    pub fn validate(&self) -> Result<SignupData<'_>, AppError> {
        let username = self.username.as_deref().unwrap_or("").trim();
        let email = self.email.as_deref().unwrap_or("").trim();
        let password = self.password.as_deref().unwrap_or("");

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest("All fields are required".into()));
        }

        if password.chars().count() < 6 {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".into(),
            ));
        }

        if !EMAIL_REGEX.is_match(email) {
            return Err(AppError::BadRequest("Please enter a valid email".into()));
        }

        let username_len = username.chars().count();
        if !(3..=20).contains(&username_len) {
            return Err(AppError::BadRequest(
                "Username must be between 3 and 20 characters".into(),
            ));
        }

        Ok(SignupData {
            username,
            email,
            password,
        })
    }
}

/// Payload for `POST /login`. Optional fields for the same reason as signup.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// A login payload that passed validation. Borrows from the request.
#[derive(Debug, Clone, Copy)]
pub struct LoginData<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<LoginData<'_>, AppError> {
        let email = self.email.as_deref().unwrap_or("").trim();
        let password = self.password.as_deref().unwrap_or("");

        if email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required".into(),
            ));
        }

        Ok(LoginData { email, password })
    }
}

/// Body returned by successful signup and login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    /// The JWT the client attaches as `Authorization: Bearer <token>`.
    pub token: String,
    pub user: UserProfile,
}
