//! PostgreSQL implementation of the store traits.

use async_trait::async_trait;
use uuid::Uuid;

use super::{NoteStore, PrincipalResolver, StoreError, UserStore};
use crate::{
    db::DbPool,
    models::{note::Note, user::User},
};

/// Store backed by the shared sqlx connection pool.
///
/// Cloning is cheap; the pool is reference counted internally.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrincipalResolver for PgStore {
    async fn resolve(&self, api_key: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, created_at, updated_at, name, api_key
             FROM users
             WHERE api_key = $1",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, user: User) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, created_at, updated_at, name, api_key)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at, updated_at, name, api_key
            "#,
        )
        .bind(user.id)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(user.name)
        .bind(user.api_key)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl NoteStore for PgStore {
    async fn create_note(&self, note: Note) -> Result<Note, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (id, created_at, updated_at, note, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at, updated_at, note, user_id
            "#,
        )
        .bind(note.id)
        .bind(note.created_at)
        .bind(note.updated_at)
        .bind(note.note)
        // Owner comes from the authenticated principal, never the request body
        .bind(note.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    async fn notes_for_user(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, created_at, updated_at, note, user_id
            FROM notes
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }
}
