//! Domain layer - Core entities and request payloads
//!
//! Contains the canonical `User` shape and the DTOs accepted when
//! creating or updating one. No infrastructure dependencies.

pub mod user;

pub use user::{CreateUser, UpdateUser, User};
