use crate::error::AppError;
use bcrypt::{hash, verify};

/// bcrypt work factor. The stored hash encodes it, so existing hashes keep
/// verifying if this ever changes.
const BCRYPT_COST: u32 = 12;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(candidate: &str, password_hash: &str) -> Result<bool, AppError> {
    verify(candidate, password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
