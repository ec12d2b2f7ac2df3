//! Response envelopes for the user endpoints.
//!
//! Bodies are keyed by a human-readable label, e.g.
//! `{"User created": {"id": 1, "full_name": "Alice"}}`.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::User;

/// Body returned after a successful create
#[derive(Debug, Serialize, ToSchema)]
pub struct UserCreated {
    #[serde(rename = "User created")]
    pub user: User,
}

/// Body returned after a successful update
#[derive(Debug, Serialize, ToSchema)]
pub struct UserUpdated {
    #[serde(rename = "User updated")]
    pub user: User,
}

/// Body returned after a successful delete; the id is rendered as a string
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDeleted {
    #[serde(rename = "User deleted")]
    #[schema(example = "1")]
    pub id: String,
}

impl UserDeleted {
    pub fn new(id: i32) -> Self {
        Self { id: id.to_string() }
    }
}

/// Created response helper: 201 with the wrapped body as JSON
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_labels() {
        let user = User::new(1, "Alice");

        assert_eq!(
            serde_json::to_value(UserCreated { user: user.clone() }).unwrap(),
            json!({ "User created": { "id": 1, "full_name": "Alice" } })
        );
        assert_eq!(
            serde_json::to_value(UserUpdated { user }).unwrap(),
            json!({ "User updated": { "id": 1, "full_name": "Alice" } })
        );
        assert_eq!(
            serde_json::to_value(UserDeleted::new(1)).unwrap(),
            json!({ "User deleted": "1" })
        );
    }

    #[test]
    fn test_created_sets_status() {
        let response = Created(UserDeleted::new(4)).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
