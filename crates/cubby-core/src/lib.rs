//! Core types and traits for the Cubby record service.
//!
//! This crate provides the shared domain model, the store adapter
//! contract, and the repository/service traits implemented by the
//! storage and service crates.

pub mod error;
pub mod key;
pub mod record;
pub mod repository;
pub mod service;
pub mod store;

pub use error::{RepositoryError, ServiceError, StoreError};
pub use key::RecordKey;
pub use record::Record;
pub use repository::Repository;
pub use service::RecordService;
pub use store::Store;
