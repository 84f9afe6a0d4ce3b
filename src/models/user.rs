//! User model and API request types.
//!
//! A user is the principal of this service: every API key belongs to exactly
//! one user, and protected handlers receive the user resolved from the key.

use chrono::{DateTime, Utc};
use rand::random;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `created_at` / `updated_at`: Row timestamps
/// - `name`: Display name supplied at creation
/// - `api_key`: 64 hex characters, unique
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "created_at": "2025-12-20T10:00:00Z",
///   "updated_at": "2025-12-20T10:00:00Z",
///   "name": "Ada",
///   "api_key": "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,

    /// Credential presented as `Authorization: ApiKey <api_key>`.
    ///
    /// Returned to the owner so the key can be retrieved after creation.
    pub api_key: String,
}

impl User {
    /// Build a new user with a fresh id, timestamps and API key.
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name,
            api_key: generate_api_key(),
        }
    }
}

/// Request body for creating a user.
///
/// ```json
/// { "name": "Ada" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Generate a new API key.
///
/// The key is the hex-encoded SHA-256 digest of 32 random bytes, so it is
/// always 64 lowercase hex characters and contains no whitespace.
pub fn generate_api_key() -> String {
    let seed: [u8; 32] = random();

    let mut hasher = Sha256::new();
    hasher.update(seed);

    hex::encode(hasher.finalize())
}
