//! Persistence layer.
//!
//! Handlers and the auth middleware talk to storage only through the traits
//! in this module. Production uses [`postgres::PgStore`]; tests use the
//! in-memory store.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{note::Note, user::User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Maps a raw API key to the user that owns it.
///
/// This is the only lookup the auth middleware needs. `Ok(None)` means the key
/// is unknown; the middleware treats it exactly like a malformed header.
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    async fn resolve(&self, api_key: &str) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a freshly built user and return the stored row.
    async fn create_user(&self, user: User) -> Result<User, StoreError>;
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persist a freshly built note and return the stored row.
    async fn create_note(&self, note: Note) -> Result<Note, StoreError>;

    /// All notes owned by `user_id`, oldest first.
    async fn notes_for_user(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError>;
}
