//! Todo data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating or replacing a todo.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TodoCreate {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub completed: bool,
}

/// Complete todo record as stored and as returned on the wire.
///
/// Timestamps serialize as ISO-8601 (UTC). The id is immutable after
/// creation; all other fields are replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
