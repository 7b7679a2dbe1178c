use axum::extract::FromRef;
use storage::Database;

use crate::features::sessions::registry::SessionRegistry;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self::with_sessions(db, SessionRegistry::default())
    }

    pub fn with_sessions(db: Database, sessions: SessionRegistry) -> Self {
        Self { db, sessions }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for SessionRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
