//! `MongoDB` implementation of [`OrderRepository`].

use std::future::Future;

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};

use svcorder_app::ports::OrderRepository;
use svcorder_domain::error::SvcOrderError;
use svcorder_domain::id::OrderId;
use svcorder_domain::order::Order;

use crate::ORDERS_COLLECTION;
use crate::client::{Database, ensure_unique_id};
use crate::documents::OrderDocument;
use crate::error::StorageError;

/// `MongoDB`-backed `orders` collection.
#[derive(Debug, Clone)]
pub struct MongoOrderRepository {
    collection: Collection<OrderDocument>,
}

impl MongoOrderRepository {
    /// Create a new repository on the given database.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.handle().collection(ORDERS_COLLECTION),
        }
    }

    async fn find(
        collection: Collection<OrderDocument>,
        filter: Document,
    ) -> Result<Vec<Order>, SvcOrderError> {
        let docs: Vec<OrderDocument> = collection
            .find(filter)
            .await
            .map_err(StorageError::from)?
            .try_collect()
            .await
            .map_err(StorageError::from)?;

        let orders: Vec<Order> = docs
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<_, _>>()?;
        Ok(orders)
    }
}

impl OrderRepository for MongoOrderRepository {
    fn drop_collection(&self) -> impl Future<Output = Result<(), SvcOrderError>> + Send {
        let collection = self.collection.clone();
        async move {
            collection.drop().await.map_err(StorageError::from)?;
            tracing::debug!(collection = ORDERS_COLLECTION, "collection dropped");
            Ok(())
        }
    }

    fn insert_many(
        &self,
        orders: Vec<Order>,
    ) -> impl Future<Output = Result<usize, SvcOrderError>> + Send {
        let collection = self.collection.clone();
        async move {
            if orders.is_empty() {
                return Ok(0);
            }
            ensure_unique_id(&collection).await?;
            let docs: Vec<OrderDocument> = orders.iter().map(OrderDocument::from).collect();
            let result = collection
                .insert_many(docs)
                .await
                .map_err(StorageError::from)?;
            let inserted = result.inserted_ids.len();
            tracing::debug!(
                collection = ORDERS_COLLECTION,
                inserted,
                "documents inserted"
            );
            Ok(inserted)
        }
    }

    fn get_by_id(
        &self,
        id: OrderId,
    ) -> impl Future<Output = Result<Option<Order>, SvcOrderError>> + Send {
        let collection = self.collection.clone();
        async move {
            let doc = collection
                .find_one(doc! { "id": id.to_string() })
                .await
                .map_err(StorageError::from)?;

            Ok(doc.map(Order::try_from).transpose()?)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Order>, SvcOrderError>> + Send {
        Self::find(self.collection.clone(), doc! {})
    }

    fn find_by_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Order>, SvcOrderError>> + Send {
        Self::find(self.collection.clone(), doc! { "user_id": user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Config;
    use mongodb::bson::oid::ObjectId;
    use svcorder_domain::id::ServiceId;

    async fn setup() -> (Database, MongoOrderRepository) {
        let uri = std::env::var("SVCORDER_TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db = Config {
            uri,
            database: format!("svcorder_test_{}", ObjectId::new().to_hex()),
        }
        .build()
        .await
        .unwrap();
        let repo = MongoOrderRepository::new(&db);
        (db, repo)
    }

    fn order_for(user: &str, services: usize) -> Order {
        Order::builder()
            .user_id(user)
            .services((0..services).map(|_| ServiceId::new()))
            .total_price(1050.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires a running MongoDB server"]
    async fn should_keep_reference_order_through_roundtrip() {
        let (db, repo) = setup().await;
        let order = order_for("natasha", 3);
        let id = order.id;
        repo.insert_many(vec![order.clone()]).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(fetched.services, order.services);
        db.handle().drop().await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires a running MongoDB server"]
    async fn should_find_orders_by_user() {
        let (db, repo) = setup().await;
        repo.insert_many(vec![
            order_for("admin", 1),
            order_for("iazhbanov", 2),
            order_for("admin", 0),
        ])
        .await
        .unwrap();

        assert_eq!(repo.find_by_user("admin").await.unwrap().len(), 2);
        assert_eq!(repo.get_all().await.unwrap().len(), 3);
        db.handle().drop().await.unwrap();
    }
}
