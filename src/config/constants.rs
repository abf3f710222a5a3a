//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database (MongoDB)
// =============================================================================

/// Default MongoDB connection URL (for development)
pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_MONGODB_DATABASE: &str = "userflow";

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Maximum number of pooled connections
pub const MONGODB_MAX_POOL_SIZE: u32 = 100;

/// Minimum number of pooled connections
pub const MONGODB_MIN_POOL_SIZE: u32 = 5;

/// Connection timeout in seconds
pub const MONGODB_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Server selection timeout in seconds
pub const MONGODB_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;
