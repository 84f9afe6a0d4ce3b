//! Shared state for the database-backed routes.

use std::sync::Arc;

use crate::store::{NoteStore, PrincipalResolver, UserStore, postgres::PgStore};

/// Collaborators handed to handlers and the auth middleware.
///
/// Everything is behind a trait object so the router can be built over any
/// store; `main` wires all three to the same [`PgStore`].
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub notes: Arc<dyn NoteStore>,
    pub resolver: Arc<dyn PrincipalResolver>,
}

impl AppState {
    /// State where one store serves every role.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserStore + NoteStore + PrincipalResolver + 'static,
    {
        Self {
            users: store.clone(),
            notes: store.clone(),
            resolver: store,
        }
    }

    pub fn postgres(store: PgStore) -> Self {
        Self::from_store(Arc::new(store))
    }
}
