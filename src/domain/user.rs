//! User domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Identifier assigned by the storage layer
    #[schema(example = 1)]
    pub id: i32,
    /// Full name as supplied by the client
    #[schema(example = "Alice Liddell")]
    pub full_name: String,
}

impl User {
    pub fn new(id: i32, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }

    /// Replace the full name; the id never changes.
    pub fn rename(&mut self, full_name: String) {
        self.full_name = full_name;
    }
}
