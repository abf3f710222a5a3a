//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::USERS_COLLECTION;
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state wiring the service layer into the router.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Wire the default repository and service from a database handle.
    pub fn from_database(database: &Database) -> Self {
        let repository = Arc::new(UserStore::new(database.collection(USERS_COLLECTION)));
        Self::new(Arc::new(UserManager::new(repository)))
    }
}
