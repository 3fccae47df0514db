//! Service — something a customer can order, at a fixed price.

use serde::{Deserialize, Serialize};

use crate::error::{SvcOrderError, ValidationError, check_amount};
use crate::id::ServiceId;
use crate::time::{Timestamp, now};

/// An orderable service, e.g. wallpaper painting or a photo session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: Timestamp,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] when `name` is empty or `price`
    /// is negative or not finite.
    pub fn validate(&self) -> Result<(), SvcOrderError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        check_amount(self.price)?;
        Ok(())
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<ServiceId>,
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    created_at: Option<Timestamp>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: ServiceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// Missing `id` and `created_at` are generated; a missing price is zero.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] if `name` is missing or empty, or
    /// `price` is invalid.
    pub fn build(self) -> Result<Service, SvcOrderError> {
        let service = Service {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(now),
        };
        service.validate()?;
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_service_when_name_and_price_provided() {
        let service = Service::builder()
            .name("Пишу лабы")
            .description("Сделаю лабы по программной инженерии")
            .price(12000.0)
            .build()
            .unwrap();
        assert_eq!(service.name, "Пишу лабы");
        assert!((service.price - 12000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Service::builder().price(10.0).build();
        assert!(matches!(
            result,
            Err(SvcOrderError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_is_negative() {
        let result = Service::builder().name("Paint").price(-5.0).build();
        assert!(matches!(
            result,
            Err(SvcOrderError::Validation(ValidationError::InvalidAmount(_)))
        ));
    }

    #[test]
    fn should_allow_free_service_with_empty_description() {
        let service = Service::builder().name("Consultation").build().unwrap();
        assert!(service.description.is_empty());
        assert!(service.price.abs() < f64::EPSILON);
    }

    #[test]
    fn should_keep_explicit_id_and_timestamp() {
        let id = ServiceId::new();
        let ts = now();
        let service = Service::builder()
            .id(id)
            .name("Photo")
            .created_at(ts)
            .build()
            .unwrap();
        assert_eq!(service.id, id);
        assert_eq!(service.created_at, ts);
    }
}
