//! `MongoDB` client setup.

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, IndexModel};

use crate::error::StorageError;

/// Configuration for the `MongoDB` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string (e.g. `mongodb://localhost:27017`).
    pub uri: String,
    /// Logical database holding the collections.
    pub database: String,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Parses the connection string, selects the logical database and sends
    /// a `ping` so an unreachable server is reported before any data is
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URI is invalid or the server does not answer.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::connect(&self.uri, &self.database).await
    }
}

/// Handle to the selected logical database.
#[derive(Debug, Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    async fn connect(uri: &str, name: &str) -> Result<Self, StorageError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(name);
        db.run_command(doc! { "ping": 1 }).await?;
        tracing::debug!(database = name, "connected to MongoDB");
        Ok(Self { db })
    }

    /// Borrow the underlying driver handle.
    #[must_use]
    pub fn handle(&self) -> &mongodb::Database {
        &self.db
    }
}

/// Create the unique index on `id` unless it already exists.
pub(crate) async fn ensure_unique_id<T: Send + Sync>(
    collection: &mongodb::Collection<T>,
) -> Result<(), StorageError> {
    let index = IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    collection.create_index(index).await?;
    Ok(())
}
