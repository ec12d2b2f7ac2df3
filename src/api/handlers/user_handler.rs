//! User handlers.
//!
//! One set of handlers serves both storage backends; they only see the
//! `UserRepository` held in [`AppState`].

use std::borrow::Cow;

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, MethodRouter},
    Router,
};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MAX_FULL_NAME_LENGTH, MSG_FIELD_BLANK};
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{Created, UserCreated, UserDeleted, UserUpdated};

/// Create/update request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Full name; surrounding whitespace is trimmed
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        required(message = "This field is required."),
        length(
            max = MAX_FULL_NAME_LENGTH,
            message = "Ensure this field has no more than 100 characters."
        ),
        custom(function = "not_blank")
    )]
    #[schema(example = "Alice Liddell", max_length = 100)]
    pub full_name: Option<String>,
}

fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()))
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed(MSG_FIELD_BLANK));
        return Err(error);
    }
    Ok(())
}

impl UserPayload {
    /// The validated full name. Only call after `validate()` succeeded.
    fn into_full_name(self) -> String {
        self.full_name.unwrap_or_default()
    }
}

/// Ids that are not positive integers cannot name any record.
fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(AppError::NotFound)
}

/// Create user routes, with and without the trailing slash
pub fn user_routes() -> Router<AppState> {
    let collection: MethodRouter<AppState> = get(list_users)
        .post(create_user)
        .put(update_without_id)
        .delete(delete_without_id);
    let item: MethodRouter<AppState> = get(get_user).put(update_user).delete(delete_user);

    Router::new()
        .route("/users", collection.clone())
        .route("/users/", collection)
        .route("/users/:id", item.clone())
        .route("/users/:id/", item)
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}/",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_id(&id)?;
    let user = state.users.get(id).await?.ok_or_not_found()?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserCreated),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Created<UserCreated>> {
    let user = state.users.create(payload.into_full_name()).await?;
    tracing::info!(user_id = user.id, "User created");
    Ok(Created(UserCreated { user }))
}

/// Replace a user's full name
#[utoipa::path(
    put,
    path = "/users/{id}/",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 201, description = "User updated", body = UserUpdated),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<Created<UserUpdated>> {
    let id = parse_id(&id)?;
    let user = state
        .users
        .update(id, payload.into_full_name())
        .await?
        .ok_or_not_found()?;

    tracing::info!(user_id = user.id, "User updated");
    Ok(Created(UserUpdated { user }))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}/",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserDeleted),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserDeleted>> {
    let id = parse_id(&id)?;
    let user = state.users.delete(id).await?.ok_or_not_found()?;

    tracing::info!(user_id = user.id, "User deleted");
    Ok(Json(UserDeleted::new(user.id)))
}

/// PUT on the collection: an id is required
#[utoipa::path(
    put,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 405, description = "Update requires an id")
    )
)]
pub async fn update_without_id() -> AppError {
    AppError::method_not_allowed("PUT")
}

/// DELETE on the collection: an id is required
#[utoipa::path(
    delete,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 405, description = "Delete requires an id")
    )
)]
pub async fn delete_without_id() -> AppError {
    AppError::method_not_allowed("DELETE")
}
