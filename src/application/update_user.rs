use std::sync::Arc;

use crate::domain::{UpdateUser, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// Applies a partial update to an existing user.
///
/// `Ok(None)` means no user has the given id; it is not an error.
pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: String, data: UpdateUser) -> AppResult<Option<User>> {
        self.repo.update(id, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    fn rename(name: &str) -> UpdateUser {
        UpdateUser {
            email: None,
            name: Some(Some(name.to_string())),
        }
    }

    #[tokio::test]
    async fn test_update_user_returns_updated_user() {
        let updated = User {
            id: "user-123".to_string(),
            email: "test@example.com".to_string(),
            name: Some("Updated Name".to_string()),
        };
        let returned = updated.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(eq("user-123".to_string()), eq(rename("Updated Name")))
            .times(1)
            .returning(move |_, _| Ok(Some(returned.clone())));

        let result = UpdateUserUseCase::new(Arc::new(repo))
            .execute("user-123".to_string(), rename("Updated Name"))
            .await;

        assert_eq!(result.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_user_not_found_is_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let result = UpdateUserUseCase::new(Arc::new(repo))
            .execute("non-existent-user".to_string(), rename("Updated Name"))
            .await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_update_user_propagates_storage_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|_, _| Err(AppError::Database(DbErr::Custom("timeout".to_string()))));

        let result = UpdateUserUseCase::new(Arc::new(repo))
            .execute("user-123".to_string(), UpdateUser::default())
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
