//! User Registry - REST resource manager for users.
//!
//! Exposes list / retrieve / create / update / delete over HTTP. The records
//! live either in process memory or in a relational table; `DB_TYPE=memory`
//! picks the former at startup.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `User` entity
//! - **infra**: Database, migrations and the two user repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, StorageBackend};
pub use domain::User;
pub use errors::{AppError, AppResult};
pub use infra::{MemoryUserStore, UserRepository, UserStore};
