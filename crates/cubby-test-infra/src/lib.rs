//! Disposable container fixtures for integration tests.

pub mod error;
pub mod mysql;

pub use error::{Result, TestInfraError};
