//! Storage-specific error type wrapping driver errors.

use svcorder_domain::error::SvcOrderError;

/// Errors originating from the `MongoDB` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A command, query or connection failed.
    #[error("database error")]
    Database(#[from] mongodb::error::Error),

    /// A stored document could not be mapped back to a domain record.
    #[error("malformed document in {collection}: {reason}")]
    Decode {
        collection: &'static str,
        reason: String,
    },
}

impl From<StorageError> for SvcOrderError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
