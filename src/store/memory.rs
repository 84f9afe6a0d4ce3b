//! In-memory store for tests.
//!
//! Records every resolver call so tests can assert how often the middleware
//! hit the store. Key lookups and user/note writes can be made to fail
//! independently, so the 401 and 500 paths are reachable without a database.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

use super::{NoteStore, PrincipalResolver, StoreError, UserStore};
use crate::models::{note::Note, user::User};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    notes: Mutex<Vec<Note>>,
    resolve_calls: AtomicUsize,
    resolver_failing: AtomicBool,
    records_failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user directly and return it.
    pub fn seed_user(&self, name: &str) -> User {
        let user = User::new(name.to_string());
        self.users.lock().unwrap().push(user.clone());
        user
    }

    /// Make key lookups fail as if the pool were exhausted.
    pub fn set_resolver_failing(&self, failing: bool) {
        self.resolver_failing.store(failing, Ordering::SeqCst);
    }

    /// Make user and note reads/writes fail while key lookups keep working.
    pub fn set_records_failing(&self, failing: bool) {
        self.records_failing.store(failing, Ordering::SeqCst);
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    fn check(switch: &AtomicBool) -> Result<(), StoreError> {
        if switch.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl PrincipalResolver for MemoryStore {
    async fn resolve(&self, api_key: &str) -> Result<Option<User>, StoreError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.resolver_failing)?;

        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.api_key == api_key).cloned())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: User) -> Result<User, StoreError> {
        Self::check(&self.records_failing)?;
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create_note(&self, note: Note) -> Result<Note, StoreError> {
        Self::check(&self.records_failing)?;
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn notes_for_user(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError> {
        Self::check(&self.records_failing)?;
        let notes = self.notes.lock().unwrap();
        Ok(notes.iter().filter(|n| n.user_id == user_id).cloned().collect())
    }
}
