//! MongoDB connection and initialization.

use std::time::Duration;

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use crate::config::{
    Config, MONGODB_CONNECT_TIMEOUT_SECS, MONGODB_MAX_POOL_SIZE, MONGODB_MIN_POOL_SIZE,
    MONGODB_SERVER_SELECTION_TIMEOUT_SECS,
};
use crate::errors::AppResult;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    client: Client,
    database: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB and verify connectivity with a ping.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_url).await?;
        options.max_pool_size = Some(MONGODB_MAX_POOL_SIZE);
        options.min_pool_size = Some(MONGODB_MIN_POOL_SIZE);
        options.connect_timeout = Some(Duration::from_secs(MONGODB_CONNECT_TIMEOUT_SECS));
        options.server_selection_timeout =
            Some(Duration::from_secs(MONGODB_SERVER_SELECTION_TIMEOUT_SECS));

        let client = Client::with_options(options)?;
        let database = client.database(&config.mongodb_database);

        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = %config.mongodb_database, "MongoDB connected");

        Ok(Self { client, database })
    }

    /// Get a typed handle to a collection.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Check connectivity by issuing a ping command.
    pub async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}
