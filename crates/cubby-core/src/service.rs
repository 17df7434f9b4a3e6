use crate::error::ServiceError;
use crate::key::RecordKey;
use crate::record::Record;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// The record CRUD operations exposed to the HTTP surface.
///
/// Implementations validate input before touching the repository and
/// translate absence into [`ServiceError::RecordNotFound`].
#[async_trait]
pub trait RecordService: Send + Sync + 'static {
    /// Stores `value` under a new key and returns the key.
    /// Fails with `ValueNotInformed` when `value` is empty.
    async fn insert(&self, value: String) -> Result<RecordKey>;

    /// Replaces the value of the record under `key`.
    /// Fails with `KeyNotInformed` for the nil key, `ValueNotInformed`
    /// for an empty value, `RecordNotFound` when no record matched.
    async fn update(&self, key: RecordKey, new_value: String) -> Result<()>;

    /// Removes the record under `key`.
    /// Fails with `KeyNotInformed` for the nil key, `RecordNotFound`
    /// when no record matched.
    async fn delete(&self, key: RecordKey) -> Result<()>;

    /// Returns the record under `key`.
    /// Fails with `KeyNotInformed` for the nil key, `RecordNotFound`
    /// when there is none.
    async fn get(&self, key: RecordKey) -> Result<Record>;

    /// Returns all records. Fails with `RecordNotFound` when the
    /// collection is empty.
    async fn list(&self) -> Result<Vec<Record>>;
}
