//! # svcorder-adapter-storage-memory
//!
//! Process-local stand-in for the document store.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `svcorder-app::ports::storage`
//! - Mirror the store's collection semantics: dropping a missing collection is
//!   a no-op, `id` is unique per collection, batch inserts are ordered and stop
//!   at the first duplicate
//!
//! Nothing survives the process, which makes this adapter the dry-run backend
//! of `svcorder-seed` and the fixture store of the integration tests.
//!
//! ## Dependency rule
//! Depends on `svcorder-app` (for port traits) and `svcorder-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod collection;
mod error;
mod order_repo;
mod service_repo;

pub use error::StorageError;
pub use order_repo::MemoryOrderRepository;
pub use service_repo::MemoryServiceRepository;
