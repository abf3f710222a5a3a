//! Userflow API - A reactive user CRUD microservice
//!
//! An HTTP layer exposes create, get-by-id, list-all, update and delete
//! operations on a `User` entity backed by MongoDB.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and DTO mappings
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (document store, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::User;
pub use errors::{AppError, AppResult};
