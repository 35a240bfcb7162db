//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use sea_orm::DbErr;
use uuid::Uuid;

use user_api::domain::{CreateUser, UpdateUser, User};
use user_api::errors::{AppError, AppResult};
use user_api::infra::UserRepository;

/// In-memory repository that behaves like the database-backed one.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.snapshot())
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: data.email,
            name: data.name,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: String, data: UpdateUser) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(email) = data.email {
            user.email = email;
        }
        if let Some(name) = data.name {
            user.name = name;
        }

        Ok(Some(user.clone()))
    }
}

/// Repository whose every call fails as an unreachable store would.
pub struct UnreachableUserStore;

fn unreachable() -> AppError {
    AppError::Database(DbErr::Custom("connection refused".to_string()))
}

#[async_trait]
impl UserRepository for UnreachableUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Err(unreachable())
    }

    async fn create(&self, _data: CreateUser) -> AppResult<User> {
        Err(unreachable())
    }

    async fn update(&self, _id: String, _data: UpdateUser) -> AppResult<Option<User>> {
        Err(unreachable())
    }
}

pub fn user(id: &str, email: &str, name: Option<&str>) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.map(str::to_string),
    }
}
