//! Application layer - Use cases.
//!
//! Each use case wraps exactly one repository operation. They depend on
//! the [`UserRepository`] abstraction, injected at construction, and pass
//! results and errors through untouched.

mod create_user;
mod list_users;
mod update_user;

use std::sync::Arc;

pub use create_user::CreateUserUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user::UpdateUserUseCase;

use crate::infra::UserRepository;

/// The user use cases, built over one shared repository.
#[derive(Clone)]
pub struct UserUseCases {
    pub list: Arc<ListUsersUseCase>,
    pub create: Arc<CreateUserUseCase>,
    pub update: Arc<UpdateUserUseCase>,
}

impl UserUseCases {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            list: Arc::new(ListUsersUseCase::new(repo.clone())),
            create: Arc::new(CreateUserUseCase::new(repo.clone())),
            update: Arc::new(UpdateUserUseCase::new(repo)),
        }
    }
}
