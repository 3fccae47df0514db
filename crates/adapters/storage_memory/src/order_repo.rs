//! In-memory implementation of [`OrderRepository`].

use std::future::Future;

use svcorder_app::ports::OrderRepository;
use svcorder_domain::error::SvcOrderError;
use svcorder_domain::id::OrderId;
use svcorder_domain::order::Order;

use crate::collection::Collection;

/// In-memory `orders` collection. Clones share the same documents.
#[derive(Debug, Clone)]
pub struct MemoryOrderRepository {
    collection: Collection<Order>,
}

impl Default for MemoryOrderRepository {
    fn default() -> Self {
        Self {
            collection: Collection::new("orders"),
        }
    }
}

impl MemoryOrderRepository {
    /// Whether the collection currently exists (inserted into and not dropped).
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Storage`] if the collection lock is poisoned.
    pub fn collection_exists(&self) -> Result<bool, SvcOrderError> {
        Ok(self.collection.exists()?)
    }
}

impl OrderRepository for MemoryOrderRepository {
    fn drop_collection(&self) -> impl Future<Output = Result<(), SvcOrderError>> + Send {
        let result = self.collection.drop_all().map_err(SvcOrderError::from);
        async { result }
    }

    fn insert_many(
        &self,
        orders: Vec<Order>,
    ) -> impl Future<Output = Result<usize, SvcOrderError>> + Send {
        let result = self
            .collection
            .insert_many(orders)
            .map_err(SvcOrderError::from);
        async { result }
    }

    fn get_by_id(
        &self,
        id: OrderId,
    ) -> impl Future<Output = Result<Option<Order>, SvcOrderError>> + Send {
        let result = self
            .collection
            .find_one(|o| o.id == id)
            .map_err(SvcOrderError::from);
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Order>, SvcOrderError>> + Send {
        let result = self.collection.find(|_| true).map_err(SvcOrderError::from);
        async { result }
    }

    fn find_by_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Order>, SvcOrderError>> + Send {
        let result = self
            .collection
            .find(|o| o.user_id == user_id)
            .map_err(SvcOrderError::from);
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svcorder_domain::id::ServiceId;

    fn order_for(user: &str) -> Order {
        Order::builder()
            .user_id(user)
            .service(ServiceId::new())
            .total_price(550.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_order_with_references() {
        let repo = MemoryOrderRepository::default();
        let order = order_for("iazhbanov");
        let id = order.id;

        repo.insert_many(vec![order.clone()]).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.services, order.services);
    }

    #[tokio::test]
    async fn should_find_orders_by_user() {
        let repo = MemoryOrderRepository::default();
        repo.insert_many(vec![
            order_for("admin"),
            order_for("natasha"),
            order_for("admin"),
        ])
        .await
        .unwrap();

        let admin = repo.find_by_user("admin").await.unwrap();
        assert_eq!(admin.len(), 2);
        assert!(repo.find_by_user("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_drop_orders_seen_through_every_clone() {
        let repo = MemoryOrderRepository::default();
        let handle = repo.clone();
        repo.insert_many(vec![order_for("admin")]).await.unwrap();

        handle.drop_collection().await.unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
        assert!(!repo.collection_exists().unwrap());
    }
}
