//! Infrastructure layer - External systems integration
//!
//! Database connection management and repository implementations.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};
