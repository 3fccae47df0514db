//! In-memory implementation of [`ServiceRepository`].

use std::future::Future;

use svcorder_app::ports::ServiceRepository;
use svcorder_domain::error::SvcOrderError;
use svcorder_domain::id::ServiceId;
use svcorder_domain::service::Service;

use crate::collection::Collection;

/// In-memory `services` collection. Clones share the same documents.
#[derive(Debug, Clone)]
pub struct MemoryServiceRepository {
    collection: Collection<Service>,
}

impl Default for MemoryServiceRepository {
    fn default() -> Self {
        Self {
            collection: Collection::new("services"),
        }
    }
}

impl MemoryServiceRepository {
    /// Whether the collection currently exists (inserted into and not dropped).
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Storage`] if the collection lock is poisoned.
    pub fn collection_exists(&self) -> Result<bool, SvcOrderError> {
        Ok(self.collection.exists()?)
    }
}

impl ServiceRepository for MemoryServiceRepository {
    fn drop_collection(&self) -> impl Future<Output = Result<(), SvcOrderError>> + Send {
        let result = self.collection.drop_all().map_err(SvcOrderError::from);
        async { result }
    }

    fn insert_many(
        &self,
        services: Vec<Service>,
    ) -> impl Future<Output = Result<usize, SvcOrderError>> + Send {
        let result = self
            .collection
            .insert_many(services)
            .map_err(SvcOrderError::from);
        async { result }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, SvcOrderError>> + Send {
        let result = self
            .collection
            .find_one(|s| s.id == id)
            .map_err(SvcOrderError::from);
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, SvcOrderError>> + Send {
        let result = self.collection.find(|_| true).map_err(SvcOrderError::from);
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> Service {
        Service::builder()
            .name("Фотографирую на заказ")
            .price(500.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_service() {
        let repo = MemoryServiceRepository::default();
        let service = test_service();
        let id = service.id;

        let count = repo.insert_many(vec![service.clone()]).await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(repo.get_by_id(id).await.unwrap(), Some(service));
    }

    #[tokio::test]
    async fn should_return_none_when_service_not_found() {
        let repo = MemoryServiceRepository::default();
        let result = repo.get_by_id(ServiceId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_remove_everything_on_drop() {
        let repo = MemoryServiceRepository::default();
        repo.insert_many(vec![test_service(), test_service()])
            .await
            .unwrap();

        repo.drop_collection().await.unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
        assert!(!repo.collection_exists().unwrap());
    }

    #[tokio::test]
    async fn should_succeed_when_dropping_missing_collection() {
        let repo = MemoryServiceRepository::default();
        repo.drop_collection().await.unwrap();
        repo.drop_collection().await.unwrap();
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_as_storage_error() {
        let repo = MemoryServiceRepository::default();
        let service = test_service();
        repo.insert_many(vec![service.clone()]).await.unwrap();

        let result = repo.insert_many(vec![service]).await;

        assert!(matches!(result, Err(SvcOrderError::Storage(_))));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }
}
