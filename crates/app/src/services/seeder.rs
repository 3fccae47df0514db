//! Seeder — replaces the `services` and `orders` collections with the seed
//! fixtures.
//!
//! A run is four sequential steps: drop services, drop orders, insert
//! services, insert orders. Nothing is retried or rolled back; a failure
//! part-way leaves whatever the earlier steps produced.

use std::collections::HashSet;

use svcorder_domain::error::{NotFoundError, SvcOrderError, ValidationError};
use svcorder_domain::fixtures::{self, OrderFixture, ServiceFixture};
use svcorder_domain::id::ServiceId;
use svcorder_domain::order::Order;
use svcorder_domain::service::Service;
use svcorder_domain::time::{Timestamp, now};

use crate::ports::{OrderRepository, ServiceRepository};

/// Outcome of a [`Seeder::seed`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub services_inserted: usize,
    pub orders_inserted: usize,
    /// `created_at` given to every inserted record.
    pub seeded_at: Timestamp,
}

/// Outcome of a successful [`Seeder::verify`] pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub services: usize,
    pub orders: usize,
}

/// Application service that seeds the store and checks the result.
pub struct Seeder<S, O> {
    services: S,
    orders: O,
}

impl<S: ServiceRepository, O: OrderRepository> Seeder<S, O> {
    /// Create a new seeder backed by the given repositories.
    pub fn new(services: S, orders: O) -> Self {
        Self { services, orders }
    }

    /// Drop both collections and insert the fixture records.
    ///
    /// Fixtures are built before anything is dropped, so a malformed literal
    /// leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] for a malformed fixture, or the
    /// first storage error raised by a repository.
    #[tracing::instrument(skip(self))]
    pub async fn seed(&self) -> Result<SeedReport, SvcOrderError> {
        let seeded_at = now();
        let services = fixtures::services(seeded_at)?;
        let orders = fixtures::orders(seeded_at)?;

        self.services.drop_collection().await?;
        tracing::debug!("services collection dropped");
        self.orders.drop_collection().await?;
        tracing::debug!("orders collection dropped");

        let services_inserted = self.services.insert_many(services).await?;
        let orders_inserted = self.orders.insert_many(orders).await?;

        tracing::info!(
            services = services_inserted,
            orders = orders_inserted,
            %seeded_at,
            "seed data written"
        );

        Ok(SeedReport {
            services_inserted,
            orders_inserted,
            seeded_at,
        })
    }

    /// Read both collections back and compare them with the fixtures.
    ///
    /// Checks record counts, id uniqueness, and that every fixture can be
    /// looked up with its literal content. `created_at` is not compared.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::NotFound`] when a fixture id cannot be looked
    /// up, [`ValidationError::SeedMismatch`] on any other disagreement, or a
    /// storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn verify(&self) -> Result<VerifyReport, SvcOrderError> {
        let services = self.services.get_all().await?;
        expect_count("services", services.len(), fixtures::SERVICES.len())?;
        unique_ids("services", services.iter().map(|s| s.id))?;

        for fixture in &fixtures::SERVICES {
            let id = fixture.service_id()?;
            let stored = self
                .services
                .get_by_id(id)
                .await?
                .ok_or_else(|| not_found("Service", id))?;
            check_service(fixture, &stored)?;
        }

        let orders = self.orders.get_all().await?;
        expect_count("orders", orders.len(), fixtures::ORDERS.len())?;
        unique_ids("orders", orders.iter().map(|o| o.id))?;

        for fixture in &fixtures::ORDERS {
            let id = fixture.order_id()?;
            let stored = self
                .orders
                .get_by_id(id)
                .await?
                .ok_or_else(|| not_found("Order", id))?;
            check_order(fixture, &stored)?;

            let by_user = self.orders.find_by_user(fixture.user_id).await?;
            if !by_user.iter().any(|o| o.id == id) {
                return Err(mismatch(
                    "orders",
                    format!("order {id} not listed for user {}", fixture.user_id),
                ));
            }
        }

        tracing::info!(
            services = services.len(),
            orders = orders.len(),
            "seed data verified"
        );

        Ok(VerifyReport {
            services: services.len(),
            orders: orders.len(),
        })
    }
}

fn mismatch(collection: &'static str, reason: String) -> SvcOrderError {
    ValidationError::SeedMismatch { collection, reason }.into()
}

fn not_found(entity: &'static str, id: impl std::fmt::Display) -> SvcOrderError {
    NotFoundError {
        entity,
        id: id.to_string(),
    }
    .into()
}

fn expect_count(
    collection: &'static str,
    found: usize,
    expected: usize,
) -> Result<(), SvcOrderError> {
    if found == expected {
        Ok(())
    } else {
        Err(mismatch(
            collection,
            format!("expected {expected} documents, found {found}"),
        ))
    }
}

fn unique_ids<T>(
    collection: &'static str,
    ids: impl IntoIterator<Item = T>,
) -> Result<(), SvcOrderError>
where
    T: std::hash::Hash + Eq + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        let text = id.to_string();
        if !seen.insert(id) {
            return Err(mismatch(collection, format!("duplicate id {text}")));
        }
    }
    Ok(())
}

fn same_amount(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}

fn check_service(fixture: &ServiceFixture, stored: &Service) -> Result<(), SvcOrderError> {
    if stored.name != fixture.name
        || stored.description != fixture.description
        || !same_amount(stored.price, fixture.price)
    {
        return Err(mismatch(
            "services",
            format!("service {} differs from its fixture", fixture.id),
        ));
    }
    Ok(())
}

fn check_order(fixture: &OrderFixture, stored: &Order) -> Result<(), SvcOrderError> {
    let expected: Vec<ServiceId> = fixture.service_ids()?;
    if stored.user_id != fixture.user_id
        || stored.services != expected
        || !same_amount(stored.total_price, fixture.total_price)
    {
        return Err(mismatch(
            "orders",
            format!("order {} differs from its fixture", fixture.id),
        ));
    }
    Ok(())
}
