//! # svcorder-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceRepository` — drop, bulk insert and read back services
//!   - `OrderRepository` — drop, bulk insert and read back orders
//! - Define the **driving/inbound** use-case:
//!   - `Seeder` — replace both collections with the seed fixtures, then
//!     verify what the store holds
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `svcorder-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
