//! Seed fixtures — the sample services and orders a fresh store starts with.
//!
//! Order totals are kept exactly as listed; they are not the sum of the
//! referenced service prices.

use crate::error::{SvcOrderError, ValidationError};
use crate::id::{OrderId, ServiceId};
use crate::order::Order;
use crate::service::Service;
use crate::time::Timestamp;

/// One literal service record.
#[derive(Debug, Clone, Copy)]
pub struct ServiceFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
}

/// One literal order record.
#[derive(Debug, Clone, Copy)]
pub struct OrderFixture {
    pub id: &'static str,
    pub user_id: &'static str,
    pub services: &'static [&'static str],
    pub total_price: f64,
}

const WALLPAPER: &str = "86b423fd-950c-4052-b4ca-4933b88da587";
const LAB_WORK: &str = "ee720ea8-c166-4d0e-98a0-f48d169022b2";
const PHOTOGRAPHY: &str = "45578523-f257-484d-97b3-ddb9092a0121";
const CS2_PLAYER: &str = "9100e555-a198-45d6-83c2-49ae8ef52cc0";

/// Services inserted by every seed run, in insertion order.
pub const SERVICES: [ServiceFixture; 4] = [
    ServiceFixture {
        id: WALLPAPER,
        name: "Покраска обоев",
        description: "Покаршу обои недорого",
        price: 100.00,
    },
    ServiceFixture {
        id: LAB_WORK,
        name: "Пишу лабы",
        description: "Сделаю лабы по программной инженерии",
        price: 12000.00,
    },
    ServiceFixture {
        id: PHOTOGRAPHY,
        name: "Фотографирую на заказ",
        description: "Профессиональный фотограф из ПГТ Бобруйск",
        price: 500.00,
    },
    ServiceFixture {
        id: CS2_PLAYER,
        name: "Профессиональный игрок в CS2",
        description: "Выиграю любые матчи в контр страйк",
        price: 1300.00,
    },
];

/// Orders inserted by every seed run, in insertion order.
pub const ORDERS: [OrderFixture; 3] = [
    OrderFixture {
        id: "d235ab9c-0213-4600-bb6f-21bed122aa24",
        user_id: "admin",
        services: &[WALLPAPER, PHOTOGRAPHY, CS2_PLAYER],
        total_price: 800.00,
    },
    OrderFixture {
        id: "a5997eee-6bf7-4190-85da-d7427acdfcad",
        user_id: "iazhbanov",
        services: &[WALLPAPER, PHOTOGRAPHY],
        total_price: 550.00,
    },
    OrderFixture {
        id: "7fe39bc9-d372-40d5-8958-5caef2e98934",
        user_id: "natasha",
        services: &[WALLPAPER, CS2_PLAYER, LAB_WORK],
        total_price: 1050.00,
    },
];

fn parse<T: std::str::FromStr>(value: &str) -> Result<T, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidId {
        value: value.to_string(),
    })
}

impl ServiceFixture {
    /// Parse the literal id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] if the literal is not a UUID.
    pub fn service_id(&self) -> Result<ServiceId, ValidationError> {
        parse(self.id)
    }

    /// Turn the literal into a validated [`Service`] stamped with `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] for a malformed literal.
    pub fn to_service(&self, created_at: Timestamp) -> Result<Service, SvcOrderError> {
        Service::builder()
            .id(self.service_id()?)
            .name(self.name)
            .description(self.description)
            .price(self.price)
            .created_at(created_at)
            .build()
    }
}

impl OrderFixture {
    /// Parse the literal id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] if the literal is not a UUID.
    pub fn order_id(&self) -> Result<OrderId, ValidationError> {
        parse(self.id)
    }

    /// Parse the referenced service ids, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] for the first malformed reference.
    pub fn service_ids(&self) -> Result<Vec<ServiceId>, ValidationError> {
        self.services.iter().map(|id| parse(id)).collect()
    }

    /// Turn the literal into a validated [`Order`] stamped with `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] for a malformed literal.
    pub fn to_order(&self, created_at: Timestamp) -> Result<Order, SvcOrderError> {
        Order::builder()
            .id(self.order_id()?)
            .user_id(self.user_id)
            .services(self.service_ids()?)
            .total_price(self.total_price)
            .created_at(created_at)
            .build()
    }
}

/// Build every fixture service, all sharing one `created_at`.
///
/// # Errors
///
/// Returns [`SvcOrderError::Validation`] for a malformed literal.
pub fn services(created_at: Timestamp) -> Result<Vec<Service>, SvcOrderError> {
    SERVICES
        .iter()
        .map(|fixture| fixture.to_service(created_at))
        .collect()
}

/// Build every fixture order, all sharing one `created_at`.
///
/// # Errors
///
/// Returns [`SvcOrderError::Validation`] for a malformed literal.
pub fn orders(created_at: Timestamp) -> Result<Vec<Order>, SvcOrderError> {
    ORDERS
        .iter()
        .map(|fixture| fixture.to_order(created_at))
        .collect()
}
