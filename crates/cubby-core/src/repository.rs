use crate::error::RepositoryError;
use crate::key::RecordKey;
use crate::record::Record;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Record access on top of a store adapter.
///
/// The repository owns key generation and the bounded retry on
/// duplicate-key conflicts; it reports absence as a non-error
/// (`None` / empty vec / zero count). Turning absence into a failure
/// is the service layer's job.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Persists `value` under a freshly generated key and returns the
    /// key. Retries key generation on duplicate-key conflicts up to a
    /// fixed bound, then fails with
    /// [`RepositoryError::KeyUnavailable`].
    async fn insert(&self, value: String) -> Result<RecordKey>;

    /// Sets the value of the record under `key`. Returns the number
    /// of records modified (0 when no record matched).
    async fn update(&self, key: RecordKey, new_value: String) -> Result<u64>;

    /// Removes the record under `key`. Returns the number of records
    /// removed (0 when no record matched).
    async fn delete(&self, key: RecordKey) -> Result<u64>;

    /// Returns the record under `key`, or `None` if there is none.
    async fn get(&self, key: RecordKey) -> Result<Option<Record>>;

    /// Returns all records; an empty collection is an empty vec.
    async fn list(&self) -> Result<Vec<Record>>;
}
