//! Shared response types.

mod response;

pub use response::{Created, UserCreated, UserDeleted, UserUpdated};
