use async_trait::async_trait;
use cubby_core::store::Result;
use cubby_core::{Record, RecordKey, Store, StoreError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-memory implementation of the [`Store`] contract using DashMap.
///
/// The entry API gives the same check-and-insert atomicity the MySQL
/// unique index provides, so duplicate-key behavior matches the real
/// backend. Used by unit tests and the gateway's `--memory` mode.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: DashMap<RecordKey, String>,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn insert_one(&self, record: &Record) -> Result<()> {
        match self.records.entry(record.key) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(format!(
                "key '{}' already exists",
                record.key
            ))),
            Entry::Vacant(slot) => {
                slot.insert(record.value.clone());
                Ok(())
            }
        }
    }

    async fn find_by_key(&self, key: RecordKey) -> Result<Option<Record>> {
        Ok(self.records.get(&key).map(|value| Record {
            key,
            value: value.clone(),
        }))
    }

    async fn find_all(&self) -> Result<Vec<Record>> {
        Ok(self
            .records
            .iter()
            .map(|entry| Record {
                key: *entry.key(),
                value: entry.value().clone(),
            })
            .collect())
    }

    async fn update_by_key(&self, key: RecordKey, new_value: &str) -> Result<u64> {
        match self.records.get_mut(&key) {
            Some(mut value) => {
                *value = new_value.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_key(&self, key: RecordKey) -> Result<Option<Record>> {
        Ok(self
            .records
            .remove(&key)
            .map(|(key, value)| Record { key, value }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_find() {
        let store = InMemoryStore::new();
        let record = Record::new("hello");

        store.insert_one(&record).await.unwrap();

        let found = store.find_by_key(record.key).await.unwrap().unwrap();
        assert_eq!(found, record);
    }

    #[tokio::test]
    async fn insert_duplicate_key_conflicts() {
        let store = InMemoryStore::new();
        let record = Record::new("hello");

        store.insert_one(&record).await.unwrap();
        let err = store.insert_one(&record).await.unwrap_err();

        assert!(matches!(err, StoreError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn find_missing_key_is_none() {
        let store = InMemoryStore::new();
        let found = store.find_by_key(RecordKey::generate()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty_vec() {
        let store = InMemoryStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_reports_modified_count() {
        let store = InMemoryStore::new();
        let record = Record::new("hello");
        store.insert_one(&record).await.unwrap();

        assert_eq!(store.update_by_key(record.key, "world").await.unwrap(), 1);
        assert_eq!(
            store
                .update_by_key(RecordKey::generate(), "world")
                .await
                .unwrap(),
            0
        );

        let found = store.find_by_key(record.key).await.unwrap().unwrap();
        assert_eq!(found.value, "world");
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let store = InMemoryStore::new();
        let record = Record::new("hello");
        store.insert_one(&record).await.unwrap();

        let removed = store.delete_by_key(record.key).await.unwrap();
        assert_eq!(removed, Some(record.clone()));

        assert!(store.delete_by_key(record.key).await.unwrap().is_none());
        assert!(store.is_empty());
    }
}
