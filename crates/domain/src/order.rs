//! Order — a user's selection of services and the amount charged for it.
//!
//! `services` is a loose reference list: the ids are not checked against the
//! service collection, and `total_price` is recorded as given rather than
//! summed from the referenced prices.

use serde::{Deserialize, Serialize};

use crate::error::{SvcOrderError, ValidationError, check_amount};
use crate::id::{OrderId, ServiceId};
use crate::time::{Timestamp, now};

/// An order placed by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: String,
    pub services: Vec<ServiceId>,
    pub total_price: f64,
    pub created_at: Timestamp,
}

impl Order {
    /// Create a builder for constructing an [`Order`].
    #[must_use]
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] when `user_id` is empty or
    /// `total_price` is negative or not finite.
    pub fn validate(&self) -> Result<(), SvcOrderError> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::EmptyUserId.into());
        }
        check_amount(self.total_price)?;
        Ok(())
    }

    /// Whether the order lists the given service.
    #[must_use]
    pub fn includes(&self, service: ServiceId) -> bool {
        self.services.contains(&service)
    }
}

/// Step-by-step builder for [`Order`].
#[derive(Debug, Default)]
pub struct OrderBuilder {
    id: Option<OrderId>,
    user_id: Option<String>,
    services: Vec<ServiceId>,
    total_price: Option<f64>,
    created_at: Option<Timestamp>,
}

impl OrderBuilder {
    #[must_use]
    pub fn id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Append one service reference, keeping insertion order.
    #[must_use]
    pub fn service(mut self, service: ServiceId) -> Self {
        self.services.push(service);
        self
    }

    #[must_use]
    pub fn services(mut self, services: impl IntoIterator<Item = ServiceId>) -> Self {
        self.services.extend(services);
        self
    }

    #[must_use]
    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = Some(total_price);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return an [`Order`].
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] if `user_id` is missing or empty,
    /// or `total_price` is invalid.
    pub fn build(self) -> Result<Order, SvcOrderError> {
        let order = Order {
            id: self.id.unwrap_or_default(),
            user_id: self.user_id.unwrap_or_default(),
            services: self.services,
            total_price: self.total_price.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(now),
        };
        order.validate()?;
        Ok(order)
    }
}
