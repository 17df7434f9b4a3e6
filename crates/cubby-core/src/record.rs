use crate::key::RecordKey;
use serde::{Deserialize, Serialize};

/// A stored record: an opaque string value under a unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, assigned by the repository at insert time
    /// and immutable thereafter.
    pub key: RecordKey,
    /// The record payload. Non-empty for inserts and updates; no
    /// other constraint.
    pub value: String,
}

impl Record {
    /// Creates a record with a freshly generated key.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            key: RecordKey::generate(),
            value: value.into(),
        }
    }
}
