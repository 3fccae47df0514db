//! # svcorder-domain
//!
//! Pure domain model for the svcorder service-ordering store.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Services** (things a customer can order, with a price)
//! - Define **Orders** (a user's selection of services and the amount charged)
//! - Hold the **seed fixtures** the store is initialised with
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod fixtures;
pub mod order;
pub mod service;
