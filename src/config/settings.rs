//! Application settings loaded from environment variables.

use std::env;
use std::fmt;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_STORAGE,
    STORAGE_MEMORY,
};

/// Which repository implementation backs the user endpoints.
///
/// Chosen once at startup; the running server never switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local map, lost on restart
    Memory,
    /// Relational table reached through `DATABASE_URL`
    Database,
}

impl StorageBackend {
    /// Interpret a `DB_TYPE` value. Only `"memory"` selects the in-memory store.
    pub fn from_setting(value: &str) -> Self {
        if value == STORAGE_MEMORY {
            StorageBackend::Memory
        } else {
            StorageBackend::Database
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Database => "database",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("storage", &self.storage)
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            storage: StorageBackend::from_setting(
                &env::var("DB_TYPE").unwrap_or_else(|_| DEFAULT_STORAGE.to_string()),
            ),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::from_setting(DEFAULT_STORAGE),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_setting_selects_memory() {
        assert_eq!(StorageBackend::from_setting("memory"), StorageBackend::Memory);
    }

    #[test]
    fn test_other_settings_select_database() {
        assert_eq!(StorageBackend::from_setting("postgres"), StorageBackend::Database);
        assert_eq!(StorageBackend::from_setting(""), StorageBackend::Database);
        // Match is exact, like the original env switch
        assert_eq!(StorageBackend::from_setting("Memory"), StorageBackend::Database);
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config {
            database_url: "postgres://admin:hunter2@db/users".to_string(),
            ..Config::default()
        };

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 9000,
            ..Config::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
    }
}
