//! Domain layer - Core business entities and logic
//!
//! Contains the `User` entity, its request/response DTOs and the
//! mappings between them, independent of infrastructure concerns.

pub mod user;

pub use user::{UpdateUserRequest, User, UserRequest, UserResponse};
