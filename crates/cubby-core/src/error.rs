use thiserror::Error;

/// Failures reported by a store adapter.
///
/// Adapters map their driver's native errors into this closed set;
/// anything unrecognized lands in `Query`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The key of an inserted record already exists.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    /// The store did not answer within its configured window.
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("invalid store configuration: {0}")]
    Configuration(String),
}

/// Failures reported by the record repository.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Key generation collided on every insert attempt.
    #[error("could not obtain an unused key after the maximum number of attempts")]
    KeyUnavailable,
    /// The store timed out. `server` is a best-effort address scraped
    /// from the timeout diagnostic, `"unspecified"` when none was found.
    /// Diagnostic only; never rely on it for correctness.
    #[error("store server '{server}' did not respond")]
    Timeout { server: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures reported by the record service.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("record key not informed")]
    KeyNotInformed,
    #[error("record value not informed")]
    ValueNotInformed,
    #[error("record not found")]
    RecordNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
