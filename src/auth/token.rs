use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Tokens are bearer credentials with no server-side session: once issued they
/// stay valid until this window closes (there is no revocation list).
const TOKEN_TTL_DAYS: i64 = 7;

/// Claims carried inside an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: i32,
    /// Expiration timestamp, seconds since epoch.
    pub exp: usize,
}

/// Signs a 7-day access token for `user_id` with the configured secret.
pub fn generate_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::days(TOKEN_TTL_DAYS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies signature and expiry, returning the decoded claims.
///
/// Every failure mode (malformed token, bad signature, expired) collapses into
/// the same 403 so callers cannot probe which check rejected them; the precise
/// reason goes to the debug log.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        log::debug!("Token verification failed: {}", e);
        AppError::Forbidden("Invalid or expired token".into())
    })
}
