use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cubby_core::{RepositoryError, ServiceError};
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Service failure carried to the HTTP boundary.
pub struct AppError(ServiceError);

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        Self(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::KeyNotInformed | ServiceError::ValueNotInformed => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::RecordNotFound => StatusCode::NOT_FOUND,
            // Collision retries exhausted: a capacity symptom the caller
            // can react to, not a server fault.
            ServiceError::Repository(RepositoryError::KeyUnavailable) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(RepositoryError::Timeout { .. })
            | ServiceError::Repository(RepositoryError::Store(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match &self.0 {
            // Raw store diagnostics stay in the logs.
            ServiceError::Repository(RepositoryError::Store(err)) => {
                error!(error = %err, "store operation failed");
                "internal store failure".to_string()
            }
            other => {
                if status.is_server_error() {
                    error!(error = %other, "request failed");
                }
                other.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
