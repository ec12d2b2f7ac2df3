//! Application state - Dependency injection container.
//!
//! The user repository is picked here, once, from configuration.

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::errors::AppResult;
use crate::infra::{Database, MemoryUserStore, UserRepository, UserStore};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository backing the user endpoints
    pub users: Arc<dyn UserRepository>,
    /// Which backend `users` is
    pub storage: StorageBackend,
    /// Database connection, present only for the database backend
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Build the state for the backend selected in `config`.
    ///
    /// The database backend connects and applies pending migrations first.
    pub async fn from_config(config: &Config) -> AppResult<Self> {
        match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory user storage");
                Ok(Self::in_memory())
            }
            StorageBackend::Database => {
                let database = Database::connect(&config.database_url).await?;
                tracing::info!("Using database user storage");
                Ok(Self::with_database(Arc::new(database)))
            }
        }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryUserStore::new()), StorageBackend::Memory, None)
    }

    /// State backed by the `users` table of `database`.
    pub fn with_database(database: Arc<Database>) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        Self::new(users, StorageBackend::Database, Some(database))
    }

    /// Create new application state with a manually injected repository.
    pub fn new(
        users: Arc<dyn UserRepository>,
        storage: StorageBackend,
        database: Option<Arc<Database>>,
    ) -> Self {
        Self {
            users,
            storage,
            database,
        }
    }
}
