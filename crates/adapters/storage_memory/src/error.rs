//! In-memory storage error type.

use svcorder_domain::error::SvcOrderError;

/// Errors originating from the in-memory store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A document with the same `id` is already in the collection.
    #[error("duplicate key {id} in {collection}")]
    DuplicateKey { collection: &'static str, id: String },

    /// A thread panicked while holding the collection lock.
    #[error("{collection} lock poisoned")]
    Poisoned { collection: &'static str },
}

impl From<StorageError> for SvcOrderError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_into_storage_error() {
        let err: SvcOrderError = StorageError::Poisoned {
            collection: "orders",
        }
        .into();
        assert!(matches!(err, SvcOrderError::Storage(_)));
    }

    #[test]
    fn should_display_duplicate_key() {
        let err = StorageError::DuplicateKey {
            collection: "services",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate key abc in services");
    }
}
