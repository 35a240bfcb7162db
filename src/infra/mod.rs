//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection pool
//! - Repositories backed by SeaORM

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};

#[cfg(test)]
pub use repositories::MockUserRepository;
