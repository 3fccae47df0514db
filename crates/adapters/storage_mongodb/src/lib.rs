//! # svcorder-adapter-storage-mongodb
//!
//! `MongoDB` persistence adapter using the official [mongodb](https://docs.rs/mongodb) driver.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `svcorder-app::ports::storage`
//! - Open the client, select the logical database and check it answers
//! - Keep a unique index on `id` in both collections
//! - Map between domain types and BSON documents
//!
//! ## Dependency rule
//! Depends on `svcorder-app` (for port traits) and `svcorder-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod client;
mod documents;
mod error;
mod order_repo;
mod service_repo;

pub use client::{Config, Database};
pub use error::StorageError;
pub use order_repo::MongoOrderRepository;
pub use service_repo::MongoServiceRepository;

/// Collection holding service documents.
pub const SERVICES_COLLECTION: &str = "services";

/// Collection holding order documents.
pub const ORDERS_COLLECTION: &str = "orders";
