use async_trait::async_trait;
use cubby_core::service::Result;
use cubby_core::{Record, RecordKey, RecordService, Repository, ServiceError};
use std::sync::Arc;
use tracing::trace;

/// Concrete implementation of the [`RecordService`] trait.
///
/// Validation is local and immediate: an empty value or the nil key
/// fails before any repository call. Absence reported by the
/// repository (a zero affected count, a `None`, an empty list) is
/// translated into [`ServiceError::RecordNotFound`] here.
#[derive(Debug, Clone)]
pub struct CrudService<R> {
    repository: Arc<R>,
}

impl<R: Repository> CrudService<R> {
    /// Creates a service over the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    fn validate_key(key: RecordKey) -> Result<()> {
        if key.is_nil() {
            return Err(ServiceError::KeyNotInformed);
        }
        Ok(())
    }

    fn validate_value(value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(ServiceError::ValueNotInformed);
        }
        Ok(())
    }
}

#[async_trait]
impl<R: Repository> RecordService for CrudService<R> {
    async fn insert(&self, value: String) -> Result<RecordKey> {
        Self::validate_value(&value)?;

        let key = self.repository.insert(value).await?;
        trace!(%key, "record inserted");
        Ok(key)
    }

    async fn update(&self, key: RecordKey, new_value: String) -> Result<()> {
        Self::validate_key(key)?;
        Self::validate_value(&new_value)?;

        let modified = self.repository.update(key, new_value).await?;
        if modified == 0 {
            return Err(ServiceError::RecordNotFound);
        }
        Ok(())
    }

    async fn delete(&self, key: RecordKey) -> Result<()> {
        Self::validate_key(key)?;

        let removed = self.repository.delete(key).await?;
        if removed == 0 {
            return Err(ServiceError::RecordNotFound);
        }
        Ok(())
    }

    async fn get(&self, key: RecordKey) -> Result<Record> {
        Self::validate_key(key)?;

        self.repository
            .get(key)
            .await?
            .ok_or(ServiceError::RecordNotFound)
    }

    async fn list(&self) -> Result<Vec<Record>> {
        let records = self.repository.list().await?;

        // An empty collection is reported as not-found, mirroring the
        // single-record lookups. Surprising but deliberate; callers
        // that want "empty list is fine" must go through the
        // repository instead.
        if records.is_empty() {
            return Err(ServiceError::RecordNotFound);
        }

        Ok(records)
    }
}
