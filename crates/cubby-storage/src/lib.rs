//! Store adapters for the Cubby record service.
//!
//! Two implementations of the [`cubby_core::Store`] contract: a
//! MySQL-backed store for deployments and a dashmap-backed in-memory
//! store for tests and local runs.

pub mod config;
pub mod memory;
pub mod mysql;

pub use config::StoreConfig;
pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
