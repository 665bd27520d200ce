//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::{NoteRepository, UserRepository};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// It holds no mutable data of its own; all reads and writes go through
/// the repositories.
#[derive(Clone)]
pub struct AppState {
    notes: Arc<dyn NoteRepository>,
    users: Arc<dyn UserRepository>,
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create application state over a store implementing both repositories.
    pub fn new<S>(store: S, config: ServerConfig) -> Self
    where
        S: NoteRepository + UserRepository + 'static,
    {
        let store = Arc::new(store);
        Self {
            notes: store.clone(),
            users: store,
            config: Arc::new(config),
        }
    }

    pub fn notes(&self) -> &dyn NoteRepository {
        self.notes.as_ref()
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
