//! Record repository and service implementations.
//!
//! The repository owns key generation and the bounded duplicate-key
//! retry; the service owns input validation and not-found
//! translation. Both implement traits from `cubby_core` so the
//! gateway can be wired against any backing store.

mod address;
pub mod repository;
pub mod service;

pub use repository::RecordRepository;
pub use service::CrudService;
