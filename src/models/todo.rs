use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A todo item owned by a user.
///
/// The table exists and the constraints below match it, but no route reads or
/// writes todos yet; the API currently exposes only the placeholder greeting
/// endpoint. TODO: wire up CRUD handlers for this model once the client grows
/// a real list view.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    /// Identifier of the owning user.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input structure for creating a todo, with the schema's validation bounds.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TodoInput {
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Builds a new `Todo` for `user_id` with a fresh UUID and timestamps.
    pub fn new(input: TodoInput, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            completed: input.completed,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
