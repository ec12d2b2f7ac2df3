//! User repository trait and its database-backed implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// A missing id is reported as `Ok(None)`, never as an error; `Err` is
/// reserved for storage failures.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users, ordered by id
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn get(&self, id: i32) -> AppResult<Option<User>>;

    /// Create a user, assigning a fresh id
    async fn create(&self, full_name: String) -> AppResult<User>;

    /// Replace the full name of an existing user
    async fn update(&self, id: i32, full_name: String) -> AppResult<Option<User>>;

    /// Remove a user, returning the removed record
    async fn delete(&self, id: i32) -> AppResult<Option<User>>;
}

/// Database implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn create(&self, full_name: String) -> AppResult<User> {
        // id left unset so the primary key sequence assigns it
        let active_model = ActiveModel {
            full_name: Set(full_name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        tracing::debug!(user_id = model.id, "User row inserted");
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, full_name: String) -> AppResult<Option<User>> {
        let Some(existing) = UserEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.full_name = Set(full_name);

        let model = active.update(&self.db).await?;
        Ok(Some(User::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<Option<User>> {
        let Some(existing) = UserEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        // Lost a race with another delete
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(User::from(existing)))
    }
}
