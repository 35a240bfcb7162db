//! User API - A layered CRUD service for user records
//!
//! REST endpoints for listing, creating and updating users, built on
//! Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity and request payloads
//! - **application**: Use cases (one per operation)
//! - **infra**: Database connection and repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Bind elsewhere
//! cargo run -- serve --host 127.0.0.1 --port 8080
//! ```

pub mod api;
pub mod application;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use application::UserUseCases;
pub use config::Config;
pub use domain::{CreateUser, UpdateUser, User};
pub use errors::{AppError, AppResult};
pub use infra::{UserRepository, UserStore};
