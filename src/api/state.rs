//! Application state shared across handlers.

use std::sync::Arc;

use crate::application::UserUseCases;
use crate::infra::{Database, UserRepository, UserStore};

/// Application state containing the use cases and, when running against
/// a real store, the database handle used for health checks.
#[derive(Clone)]
pub struct AppState {
    pub users: UserUseCases,
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the SeaORM-backed repository over `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));

        Self {
            users: UserUseCases::new(repo),
            database: Some(database),
        }
    }

    /// Wire an arbitrary repository implementation.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            users: UserUseCases::new(repo),
            database: None,
        }
    }
}
