//! User repository contract and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use super::entities::{UserActiveModel, UserEntity};
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every failure below this trait surfaces as [`AppError::Database`](crate::errors::AppError::Database).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user. Order is unspecified.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Persist a new user and return it with its assigned id.
    ///
    /// Duplicate emails are not checked here; a unique constraint in the
    /// store, if any, reports them as a database error.
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Apply the present fields of `data` to the user with `id`.
    ///
    /// Returns `Ok(None)` when no user has that id.
    async fn update(&self, id: String, data: UpdateUser) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository
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
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(&self.db).await?;
        tracing::debug!(count = models.len(), "Loaded users");

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let active_model = UserActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            email: Set(data.email),
            name: Set(data.name),
        };

        let model = active_model.insert(&self.db).await?;
        tracing::debug!(id = %model.id, "Created user");

        Ok(User::from(model))
    }

    async fn update(&self, id: String, data: UpdateUser) -> AppResult<Option<User>> {
        let Some(model) = UserEntity::find_by_id(id.as_str()).one(&self.db).await? else {
            tracing::debug!(%id, "No user to update");
            return Ok(None);
        };

        // Nothing to write
        if data.is_empty() {
            return Ok(Some(User::from(model)));
        }

        let mut active: UserActiveModel = model.into();
        if let Some(email) = data.email {
            active.email = Set(email);
        }
        if let Some(name) = data.name {
            active.name = Set(name);
        }

        let model = active.update(&self.db).await?;
        tracing::debug!(%id, "Updated user");

        Ok(Some(User::from(model)))
    }
}
