use crate::address::server_address;
use async_trait::async_trait;
use cubby_core::repository::Result;
use cubby_core::{Record, RecordKey, Repository, RepositoryError, Store, StoreError};
use std::sync::Arc;
use tracing::debug;

/// Total insert attempts before giving up with `KeyUnavailable`.
const INSERT_MAX_ATTEMPTS: u32 = 3;

/// Store-backed implementation of the [`Repository`] trait.
///
/// Keys are generated here, not by the store, so two concurrent
/// inserts can race on the same random key. The store's uniqueness
/// constraint is the only serialization point; on a duplicate-key
/// conflict the insert regenerates the key and tries again, bounded
/// by [`INSERT_MAX_ATTEMPTS`] so a pathological collision storm
/// becomes a definite failure instead of an unbounded retry.
#[derive(Debug, Clone)]
pub struct RecordRepository<S> {
    store: Arc<S>,
}

impl<S: Store> RecordRepository<S> {
    /// Creates a repository over the given store adapter.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

fn map_store_error(err: StoreError) -> RepositoryError {
    match err {
        StoreError::Timeout(message) => RepositoryError::Timeout {
            server: server_address(&message),
        },
        other => RepositoryError::Store(other),
    }
}

#[async_trait]
impl<S: Store> Repository for RecordRepository<S> {
    async fn insert(&self, value: String) -> Result<RecordKey> {
        for attempt in 1..=INSERT_MAX_ATTEMPTS {
            let record = Record {
                key: RecordKey::generate(),
                value: value.clone(),
            };

            match self.store.insert_one(&record).await {
                Ok(()) => return Ok(record.key),
                Err(StoreError::DuplicateKey(message)) => {
                    debug!(attempt, key = %record.key, %message, "insert key collision");
                }
                Err(err) => return Err(map_store_error(err)),
            }
        }

        Err(RepositoryError::KeyUnavailable)
    }

    async fn update(&self, key: RecordKey, new_value: String) -> Result<u64> {
        self.store
            .update_by_key(key, &new_value)
            .await
            .map_err(map_store_error)
    }

    async fn delete(&self, key: RecordKey) -> Result<u64> {
        let removed = self
            .store
            .delete_by_key(key)
            .await
            .map_err(map_store_error)?;

        Ok(if removed.is_some() { 1 } else { 0 })
    }

    async fn get(&self, key: RecordKey) -> Result<Option<Record>> {
        self.store.find_by_key(key).await.map_err(map_store_error)
    }

    async fn list(&self) -> Result<Vec<Record>> {
        self.store.find_all().await.map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubby_storage::InMemoryStore;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Store stub that reports a duplicate-key conflict for the first
    /// `conflicts` insert calls, then delegates to an in-memory store.
    struct ConflictingStore {
        inner: InMemoryStore,
        conflicts: u32,
        insert_calls: AtomicU32,
    }

    impl ConflictingStore {
        fn new(conflicts: u32) -> Self {
            Self {
                inner: InMemoryStore::new(),
                conflicts,
                insert_calls: AtomicU32::new(0),
            }
        }

        fn insert_calls(&self) -> u32 {
            self.insert_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Store for ConflictingStore {
        async fn insert_one(&self, record: &Record) -> cubby_core::store::Result<()> {
            let call = self.insert_calls.fetch_add(1, Ordering::SeqCst);
            if call < self.conflicts {
                return Err(StoreError::DuplicateKey(format!(
                    "key '{}' already exists",
                    record.key
                )));
            }
            self.inner.insert_one(record).await
        }

        async fn find_by_key(&self, key: RecordKey) -> cubby_core::store::Result<Option<Record>> {
            self.inner.find_by_key(key).await
        }

        async fn find_all(&self) -> cubby_core::store::Result<Vec<Record>> {
            self.inner.find_all().await
        }

        async fn update_by_key(
            &self,
            key: RecordKey,
            new_value: &str,
        ) -> cubby_core::store::Result<u64> {
            self.inner.update_by_key(key, new_value).await
        }

        async fn delete_by_key(&self, key: RecordKey) -> cubby_core::store::Result<Option<Record>> {
            self.inner.delete_by_key(key).await
        }
    }

    /// Store stub that times out on every operation.
    struct TimedOutStore {
        message: &'static str,
    }

    #[async_trait]
    impl Store for TimedOutStore {
        async fn insert_one(&self, _record: &Record) -> cubby_core::store::Result<()> {
            Err(StoreError::Timeout(self.message.to_string()))
        }

        async fn find_by_key(&self, _key: RecordKey) -> cubby_core::store::Result<Option<Record>> {
            Err(StoreError::Timeout(self.message.to_string()))
        }

        async fn find_all(&self) -> cubby_core::store::Result<Vec<Record>> {
            Err(StoreError::Timeout(self.message.to_string()))
        }

        async fn update_by_key(
            &self,
            _key: RecordKey,
            _new_value: &str,
        ) -> cubby_core::store::Result<u64> {
            Err(StoreError::Timeout(self.message.to_string()))
        }

        async fn delete_by_key(
            &self,
            _key: RecordKey,
        ) -> cubby_core::store::Result<Option<Record>> {
            Err(StoreError::Timeout(self.message.to_string()))
        }
    }

    #[tokio::test]
    async fn insert_returns_key_and_persists_value() {
        let repository = RecordRepository::new(InMemoryStore::new());

        let key = repository.insert("hello".to_string()).await.unwrap();

        assert!(!key.is_nil());
        let record = repository.get(key).await.unwrap().unwrap();
        assert_eq!(record.value, "hello");
    }

    #[tokio::test]
    async fn insert_retries_past_conflicts_below_the_bound() {
        for conflicts in 0..INSERT_MAX_ATTEMPTS {
            let store = ConflictingStore::new(conflicts);
            let repository = RecordRepository::new(store);

            let key = repository.insert("hello".to_string()).await.unwrap();

            assert!(!key.is_nil());
            let record = repository.get(key).await.unwrap().unwrap();
            assert_eq!(record.value, "hello");
        }
    }

    #[tokio::test]
    async fn insert_gives_up_after_max_attempts() {
        let store = ConflictingStore::new(INSERT_MAX_ATTEMPTS);
        let repository = RecordRepository::new(store);

        let err = repository.insert("hello".to_string()).await.unwrap_err();

        assert!(matches!(err, RepositoryError::KeyUnavailable));
        assert_eq!(repository.store.insert_calls(), INSERT_MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn each_attempt_uses_a_fresh_key() {
        // With a persistent conflict every attempt must present a new
        // candidate; the stub records the call count, the uniqueness of
        // keys is implied by RecordKey::generate. Assert the bound only.
        let store = ConflictingStore::new(u32::MAX);
        let repository = RecordRepository::new(store);

        let _ = repository.insert("hello".to_string()).await;

        assert_eq!(repository.store.insert_calls(), INSERT_MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn timeout_carries_scraped_server_address() {
        let repository = RecordRepository::new(TimedOutStore {
            message: "no response from db-1:3306 within deadline",
        });

        let err = repository.get(RecordKey::generate()).await.unwrap_err();

        match err {
            RepositoryError::Timeout { server } => assert_eq!(server, "db-1:3306"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn timeout_without_address_reports_unspecified() {
        let repository = RecordRepository::new(TimedOutStore {
            message: "operation timed out",
        });

        let err = repository.insert("hello".to_string()).await.unwrap_err();

        match err {
            RepositoryError::Timeout { server } => assert_eq!(server, "unspecified"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_reports_affected_count() {
        let repository = RecordRepository::new(InMemoryStore::new());
        let key = repository.insert("hello".to_string()).await.unwrap();

        assert_eq!(repository.delete(key).await.unwrap(), 1);
        assert_eq!(repository.delete(key).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_reports_affected_count() {
        let repository = RecordRepository::new(InMemoryStore::new());
        let key = repository.insert("hello".to_string()).await.unwrap();

        assert_eq!(repository.update(key, "world".to_string()).await.unwrap(), 1);
        assert_eq!(
            repository
                .update(RecordKey::generate(), "world".to_string())
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn get_missing_record_is_none_not_an_error() {
        let repository = RecordRepository::new(InMemoryStore::new());
        assert!(repository.get(RecordKey::generate()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_empty_collection_is_empty_vec() {
        let repository = RecordRepository::new(InMemoryStore::new());
        assert!(repository.list().await.unwrap().is_empty());
    }
}
