use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// Lists every stored user.
pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }
}
