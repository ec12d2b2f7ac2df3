//! Repository layer - Data access abstraction
//!
//! Both stores implement [`UserRepository`]; the HTTP layer only ever sees
//! the trait object.

pub(crate) mod entities;
mod memory_repository;
mod user_repository;

pub use memory_repository::MemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
