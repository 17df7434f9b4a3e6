use cubby_core::{Record, RecordKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    pub key: RecordKey,
    pub value: String,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            key: record.key,
            value: record.value,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    pub key: RecordKey,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
