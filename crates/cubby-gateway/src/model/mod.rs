mod record;

pub use record::{CreateRecordResponse, ErrorResponse, HealthResponse, RecordResponse};
