//! Note model and API request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a note record from the database.
///
/// # Database Table
///
/// Maps to the `notes` table. Each note belongs to one user (via `user_id`),
/// and notes are only ever read back for their owner.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "660e8400-e29b-41d4-a716-446655440001",
///   "created_at": "2025-12-20T11:00:00Z",
///   "updated_at": "2025-12-20T11:00:00Z",
///   "note": "buy milk",
///   "user_id": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub note: String,

    /// Owner of this note
    pub user_id: Uuid,
}

impl Note {
    /// Build a new note owned by `user_id`.
    pub fn new(user_id: Uuid, note: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            note,
            user_id,
        }
    }
}

/// Request body for creating a note.
///
/// ```json
/// { "note": "buy milk" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub note: String,
}
