use crate::error::StoreError;
use crate::key::RecordKey;
use crate::record::Record;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Contract of a backing store holding one logical collection of
/// records.
///
/// The store is the only serialization point for key uniqueness: an
/// insert with an already-taken key must fail with
/// [`StoreError::DuplicateKey`], distinguishable from every other
/// failure.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Persists a record. Fails with `DuplicateKey` if the key exists.
    async fn insert_one(&self, record: &Record) -> Result<()>;

    /// Returns the record under `key`, or `None` if there is none.
    async fn find_by_key(&self, key: RecordKey) -> Result<Option<Record>>;

    /// Returns all records, in no particular order. An empty
    /// collection yields an empty vec, never an error.
    async fn find_all(&self) -> Result<Vec<Record>>;

    /// Sets the value of the record under `key`. Returns the number
    /// of records actually modified (0 or 1, keys are unique).
    async fn update_by_key(&self, key: RecordKey, new_value: &str) -> Result<u64>;

    /// Removes the record under `key`, returning it if it existed.
    async fn delete_by_key(&self, key: RecordKey) -> Result<Option<Record>>;
}
