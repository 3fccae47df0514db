//! `MongoDB` implementation of [`ServiceRepository`].

use std::future::Future;

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;

use svcorder_app::ports::ServiceRepository;
use svcorder_domain::error::SvcOrderError;
use svcorder_domain::id::ServiceId;
use svcorder_domain::service::Service;

use crate::SERVICES_COLLECTION;
use crate::client::{Database, ensure_unique_id};
use crate::documents::ServiceDocument;
use crate::error::StorageError;

/// `MongoDB`-backed `services` collection.
#[derive(Debug, Clone)]
pub struct MongoServiceRepository {
    collection: Collection<ServiceDocument>,
}

impl MongoServiceRepository {
    /// Create a new repository on the given database.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.handle().collection(SERVICES_COLLECTION),
        }
    }
}

impl ServiceRepository for MongoServiceRepository {
    fn drop_collection(&self) -> impl Future<Output = Result<(), SvcOrderError>> + Send {
        let collection = self.collection.clone();
        async move {
            collection.drop().await.map_err(StorageError::from)?;
            tracing::debug!(collection = SERVICES_COLLECTION, "collection dropped");
            Ok(())
        }
    }

    fn insert_many(
        &self,
        services: Vec<Service>,
    ) -> impl Future<Output = Result<usize, SvcOrderError>> + Send {
        let collection = self.collection.clone();
        async move {
            if services.is_empty() {
                return Ok(0);
            }
            ensure_unique_id(&collection).await?;
            let docs: Vec<ServiceDocument> = services.iter().map(ServiceDocument::from).collect();
            let result = collection
                .insert_many(docs)
                .await
                .map_err(StorageError::from)?;
            let inserted = result.inserted_ids.len();
            tracing::debug!(
                collection = SERVICES_COLLECTION,
                inserted,
                "documents inserted"
            );
            Ok(inserted)
        }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, SvcOrderError>> + Send {
        let collection = self.collection.clone();
        async move {
            let doc = collection
                .find_one(doc! { "id": id.to_string() })
                .await
                .map_err(StorageError::from)?;

            Ok(doc.map(Service::try_from).transpose()?)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, SvcOrderError>> + Send {
        let collection = self.collection.clone();
        async move {
            let docs: Vec<ServiceDocument> = collection
                .find(doc! {})
                .await
                .map_err(StorageError::from)?
                .try_collect()
                .await
                .map_err(StorageError::from)?;

            let services: Vec<Service> = docs
                .into_iter()
                .map(Service::try_from)
                .collect::<Result<_, _>>()?;
            Ok(services)
        }
    }
}
