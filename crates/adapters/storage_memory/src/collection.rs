//! A named, droppable collection of keyed documents.

use std::sync::{Arc, Mutex, MutexGuard};

use svcorder_domain::order::Order;
use svcorder_domain::service::Service;

use crate::error::StorageError;

/// A record stored in a [`Collection`], identified by its `id`.
pub(crate) trait Document: Clone {
    fn key(&self) -> String;
}

impl Document for Service {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

impl Document for Order {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Shared handle to one collection. Clones see the same documents.
#[derive(Debug, Clone)]
pub(crate) struct Collection<T> {
    name: &'static str,
    // `None` until the first insert and again after a drop.
    docs: Arc<Mutex<Option<Vec<T>>>>,
}

impl<T: Document> Collection<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: Arc::new(Mutex::new(None)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<Vec<T>>>, StorageError> {
        self.docs
            .lock()
            .map_err(|_| StorageError::Poisoned { collection: self.name })
    }

    pub(crate) fn exists(&self) -> Result<bool, StorageError> {
        Ok(self.lock()?.is_some())
    }

    pub(crate) fn drop_all(&self) -> Result<(), StorageError> {
        let existed = self.lock()?.take().is_some();
        tracing::debug!(collection = self.name, existed, "collection dropped");
        Ok(())
    }

    /// Append `docs` in order, creating the collection if needed.
    ///
    /// Stops at the first document whose key is already present; the ones
    /// before it stay inserted.
    pub(crate) fn insert_many(&self, docs: Vec<T>) -> Result<usize, StorageError> {
        let mut guard = self.lock()?;
        let stored = guard.get_or_insert_with(Vec::new);
        let mut inserted = 0;
        for doc in docs {
            let key = doc.key();
            if stored.iter().any(|existing| existing.key() == key) {
                return Err(StorageError::DuplicateKey {
                    collection: self.name,
                    id: key,
                });
            }
            stored.push(doc);
            inserted += 1;
        }
        tracing::debug!(collection = self.name, inserted, "documents inserted");
        Ok(inserted)
    }

    pub(crate) fn find(&self, pred: impl Fn(&T) -> bool) -> Result<Vec<T>, StorageError> {
        Ok(self
            .lock()?
            .iter()
            .flatten()
            .filter(|doc| pred(*doc))
            .cloned()
            .collect())
    }

    pub(crate) fn find_one(&self, pred: impl Fn(&T) -> bool) -> Result<Option<T>, StorageError> {
        Ok(self.lock()?.iter().flatten().find(|doc| pred(*doc)).cloned())
    }
}
