//! User service - Handles user-related business logic.
//!
//! Orchestrates repository calls and maps lookup misses to the
//! domain not-found error.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{UpdateUserRequest, User, UserRequest};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

const USER_TYPE: &str = "User";

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Map the request to an entity and persist it.
    async fn save(&self, request: UserRequest) -> AppResult<User>;

    /// Get a user by id, failing with NotFound when the lookup misses.
    async fn find_by_id(&self, id: &str) -> AppResult<User>;

    /// List all stored users.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Apply the supplied fields to an existing user and persist it.
    async fn update(&self, id: &str, request: UpdateUserRequest) -> AppResult<User>;

    /// Remove a user, returning the deleted entity.
    async fn delete(&self, id: &str) -> AppResult<User>;
}

/// Concrete implementation of [`UserService`] over a repository.
pub struct UserManager {
    repository: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    async fn require(&self, id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(id, USER_TYPE))
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn save(&self, request: UserRequest) -> AppResult<User> {
        self.repository.save(User::from(request)).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<User> {
        self.require(id).await
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.repository.find_all().await
    }

    async fn update(&self, id: &str, request: UpdateUserRequest) -> AppResult<User> {
        let existing = self.require(id).await?;
        self.repository.save(existing.apply(request)).await
    }

    async fn delete(&self, id: &str) -> AppResult<User> {
        let existing = self.require(id).await?;
        self.repository.delete(existing).await
    }
}
