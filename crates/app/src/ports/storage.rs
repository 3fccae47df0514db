//! Storage port — collection-level repository traits.
//!
//! The store is treated as a set of named collections. Seeding only needs to
//! drop a collection and bulk-insert into it; the read methods exist so a run
//! can be checked afterwards.

use std::future::Future;

use svcorder_domain::error::SvcOrderError;
use svcorder_domain::id::{OrderId, ServiceId};
use svcorder_domain::order::Order;
use svcorder_domain::service::Service;

/// Persistence for the `services` collection.
pub trait ServiceRepository {
    /// Remove the collection and everything in it.
    ///
    /// Succeeds when the collection does not exist.
    fn drop_collection(&self) -> impl Future<Output = Result<(), SvcOrderError>> + Send;

    /// Insert all `services` in one batch, returning how many were written.
    fn insert_many(
        &self,
        services: Vec<Service>,
    ) -> impl Future<Output = Result<usize, SvcOrderError>> + Send;

    /// Get a service by its identifier.
    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, SvcOrderError>> + Send;

    /// Get every stored service.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, SvcOrderError>> + Send;
}

/// Persistence for the `orders` collection.
pub trait OrderRepository {
    /// Remove the collection and everything in it.
    ///
    /// Succeeds when the collection does not exist.
    fn drop_collection(&self) -> impl Future<Output = Result<(), SvcOrderError>> + Send;

    /// Insert all `orders` in one batch, returning how many were written.
    fn insert_many(
        &self,
        orders: Vec<Order>,
    ) -> impl Future<Output = Result<usize, SvcOrderError>> + Send;

    /// Get an order by its identifier.
    fn get_by_id(
        &self,
        id: OrderId,
    ) -> impl Future<Output = Result<Option<Order>, SvcOrderError>> + Send;

    /// Get every stored order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Order>, SvcOrderError>> + Send;

    /// Get the orders placed by `user_id`.
    fn find_by_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Order>, SvcOrderError>> + Send;
}
