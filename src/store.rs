//!
//! # Credential Store
//!
//! `UserStore` is the persistence handle for user records. It owns the
//! connection pool and is handed to the app as shared data, so nothing else
//! in the crate talks to the database directly.
//!
//! The uniqueness check-then-insert pair in the signup flow is deliberately
//! not transactional; the column constraints are the backstop, and a
//! concurrent duplicate surfaces here as a `Conflict` instead of a 500.

use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::models::User;

#[derive(Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Looks up a user matching either the email or the username, for the
    /// signup uniqueness pre-check.
    pub async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at, updated_at
             FROM users WHERE email = $1 OR username = $2",
        )
        .bind(normalize_email(email))
        .bind(username.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Creates a user, hashing the password as part of the operation.
    ///
    /// Hashing happens exactly once per plaintext value, here and nowhere
    /// else; the row never sees the plaintext. A uniqueness conflict raced in
    /// past the pre-check maps to `Conflict` with the combined message, since
    /// the database does not say which column lost the race in a
    /// backend-agnostic way.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;

        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, username, email, password_hash, created_at, updated_at",
        )
        .bind(username.trim())
        .bind(normalize_email(email))
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(
                "Email or username already exists".into(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Compares a candidate password against the stored hash.
    pub fn verify_password(&self, user: &User, candidate: &str) -> Result<bool, AppError> {
        verify_password(candidate, &user.password_hash)
    }
}

/// Emails are stored and queried in trimmed, lowercased form so that
/// uniqueness and login lookups are case-insensitive.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}
