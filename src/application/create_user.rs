use std::sync::Arc;

use crate::domain::{CreateUser, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// Creates a user.
///
/// No business validation runs here. Email format and uniqueness checks
/// would belong in `execute`, before the repository call.
pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, data: CreateUser) -> AppResult<User> {
        self.repo.create(data).await
    }
}
