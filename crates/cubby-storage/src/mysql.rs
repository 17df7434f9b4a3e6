use crate::config::StoreConfig;
use async_trait::async_trait;
use cubby_core::store::Result;
use cubby_core::{Record, RecordKey, Store, StoreError};
use sqlx::{MySqlPool, Row};

/// MySQL implementation of the [`Store`] contract.
///
/// One table per configured collection, keyed by the record's UUID in
/// its hyphenated string form. The primary key on `record_key` is the
/// uniqueness constraint that surfaces duplicate-key conflicts.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
    table: String,
}

impl MySqlStore {
    /// Creates a store from an existing connection pool.
    pub fn new(pool: MySqlPool, config: &StoreConfig) -> Self {
        Self {
            pool,
            table: config.collection().to_string(),
        }
    }

    /// Creates a store by opening a new connection pool against the
    /// configured server and database.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let pool = MySqlPool::connect(&config.database_url())
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool, config))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    fn parse_key(raw: &str) -> Result<RecordKey> {
        raw.parse()
            .map_err(|e| StoreError::InvalidData(format!("invalid record key '{raw}': {e}")))
    }

    fn record_from_row(row: &sqlx::mysql::MySqlRow) -> Result<Record> {
        let raw_key: String = row.try_get("record_key").map_err(map_sqlx_error)?;
        let value: String = row.try_get("record_value").map_err(map_sqlx_error)?;
        Ok(Record {
            key: Self::parse_key(&raw_key)?,
            value,
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn insert_one(&self, record: &Record) -> Result<()> {
        let result = sqlx::query(&format!(
            "INSERT INTO `{}` (record_key, record_value) VALUES (?, ?)",
            self.table
        ))
        .bind(record.key.to_string())
        .bind(record.value.as_str())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(StoreError::DuplicateKey(format!(
                "key '{}' already exists: {err}",
                record.key
            ))),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn find_by_key(&self, key: RecordKey) -> Result<Option<Record>> {
        let row = sqlx::query(&format!(
            "SELECT record_key, record_value FROM `{}` WHERE record_key = ? LIMIT 1",
            self.table
        ))
        .bind(key.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(Self::record_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Record>> {
        let rows = sqlx::query(&format!(
            "SELECT record_key, record_value FROM `{}`",
            self.table
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(Self::record_from_row).collect()
    }

    async fn update_by_key(&self, key: RecordKey, new_value: &str) -> Result<u64> {
        let result = sqlx::query(&format!(
            "UPDATE `{}` SET record_value = ? WHERE record_key = ?",
            self.table
        ))
        .bind(new_value)
        .bind(key.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_by_key(&self, key: RecordKey) -> Result<Option<Record>> {
        // Read-then-delete: no transaction, matching the single-document
        // semantics of the contract. The delete's row count decides the
        // outcome if another caller races us in between.
        let existing = self.find_by_key(key).await?;

        let result = sqlx::query(&format!(
            "DELETE FROM `{}` WHERE record_key = ?",
            self.table
        ))
        .bind(key.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() > 0 {
            Ok(existing)
        } else {
            Ok(None)
        }
    }
}
