//! BSON document shapes for the two collections.
//!
//! Ids are stored as plain strings and `created_at` as a native BSON
//! date-time. The server-assigned `_id` is ignored on the way back.

use std::str::FromStr;

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use svcorder_domain::id::{OrderId, ServiceId};
use svcorder_domain::order::Order;
use svcorder_domain::service::Service;
use svcorder_domain::time::{self, Timestamp};

use crate::error::StorageError;
use crate::{ORDERS_COLLECTION, SERVICES_COLLECTION};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ServiceDocument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct OrderDocument {
    pub id: String,
    pub user_id: String,
    pub services: Vec<String>,
    pub total_price: f64,
    pub created_at: DateTime,
}

fn to_bson_time(ts: Timestamp) -> DateTime {
    DateTime::from_millis(ts.timestamp_millis())
}

fn from_bson_time(collection: &'static str, dt: DateTime) -> Result<Timestamp, StorageError> {
    time::from_unix_millis(dt.timestamp_millis()).ok_or_else(|| StorageError::Decode {
        collection,
        reason: format!("created_at out of range: {}", dt.timestamp_millis()),
    })
}

fn parse_id<T: FromStr>(collection: &'static str, value: &str) -> Result<T, StorageError> {
    value.parse().map_err(|_| StorageError::Decode {
        collection,
        reason: format!("invalid id {value:?}"),
    })
}

impl From<&Service> for ServiceDocument {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.to_string(),
            name: service.name.clone(),
            description: service.description.clone(),
            price: service.price,
            created_at: to_bson_time(service.created_at),
        }
    }
}

impl TryFrom<ServiceDocument> for Service {
    type Error = StorageError;

    fn try_from(doc: ServiceDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id::<ServiceId>(SERVICES_COLLECTION, &doc.id)?,
            name: doc.name,
            description: doc.description,
            price: doc.price,
            created_at: from_bson_time(SERVICES_COLLECTION, doc.created_at)?,
        })
    }
}

impl From<&Order> for OrderDocument {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.clone(),
            services: order.services.iter().map(ToString::to_string).collect(),
            total_price: order.total_price,
            created_at: to_bson_time(order.created_at),
        }
    }
}

impl TryFrom<OrderDocument> for Order {
    type Error = StorageError;

    fn try_from(doc: OrderDocument) -> Result<Self, Self::Error> {
        let services: Vec<ServiceId> = doc
            .services
            .iter()
            .map(|id| parse_id::<ServiceId>(ORDERS_COLLECTION, id))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            id: parse_id::<OrderId>(ORDERS_COLLECTION, &doc.id)?,
            user_id: doc.user_id,
            services,
            total_price: doc.total_price,
            created_at: from_bson_time(ORDERS_COLLECTION, doc.created_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, Bson};

    use super::*;

    fn wallpaper() -> Service {
        Service::builder()
            .id("86b423fd-950c-4052-b4ca-4933b88da587".parse().unwrap())
            .name("Покраска обоев")
            .description("Покаршу обои недорого")
            .price(100.0)
            .created_at(time::now())
            .build()
            .unwrap()
    }

    #[test]
    fn should_store_ids_as_strings_and_time_as_bson_date() {
        let doc = bson::to_document(&ServiceDocument::from(&wallpaper())).unwrap();

        assert_eq!(
            doc.get("id"),
            Some(&Bson::String(
                "86b423fd-950c-4052-b4ca-4933b88da587".to_string()
            ))
        );
        assert!(matches!(doc.get("created_at"), Some(Bson::DateTime(_))));
        assert!(matches!(doc.get("price"), Some(Bson::Double(_))));
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn should_map_stored_service_back_to_domain() {
        let service = wallpaper();
        let mut doc = bson::to_document(&ServiceDocument::from(&service)).unwrap();
        doc.insert("_id", bson::oid::ObjectId::new());

        let parsed: ServiceDocument = bson::from_document(doc).unwrap();
        let back = Service::try_from(parsed).unwrap();

        assert_eq!(back, service);
    }

    #[test]
    fn should_store_order_references_as_string_array() {
        let order = Order::builder()
            .user_id("admin")
            .service(wallpaper().id)
            .total_price(800.0)
            .build()
            .unwrap();

        let doc = bson::to_document(&OrderDocument::from(&order)).unwrap();
        let services = doc.get_array("services").unwrap();

        assert_eq!(services.len(), 1);
        assert!(matches!(services[0], Bson::String(_)));
    }

    #[test]
    fn should_fail_decode_when_reference_is_not_a_uuid() {
        let doc = OrderDocument {
            id: "d235ab9c-0213-4600-bb6f-21bed122aa24".to_string(),
            user_id: "admin".to_string(),
            services: vec!["wallpaper".to_string()],
            total_price: 800.0,
            created_at: DateTime::now(),
        };

        let result = Order::try_from(doc);

        assert!(matches!(
            result,
            Err(StorageError::Decode {
                collection: "orders",
                ..
            })
        ));
    }
}
