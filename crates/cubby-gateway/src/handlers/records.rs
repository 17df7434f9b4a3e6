use crate::error::Result;
use crate::model::{CreateRecordResponse, RecordResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cubby_core::RecordKey;

pub async fn create_record_handler(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<CreateRecordResponse>> {
    let key = state.service().insert(value).await?;
    Ok(Json(CreateRecordResponse { key }))
}

pub async fn get_record_handler(
    State(state): State<AppState>,
    Path(key): Path<RecordKey>,
) -> Result<Json<RecordResponse>> {
    let record = state.service().get(key).await?;
    Ok(Json(RecordResponse::from(record)))
}

pub async fn list_records_handler(State(state): State<AppState>) -> Result<Response> {
    let records = state.service().list().await?;

    // The service treats an empty collection as not-found, so this
    // branch only fires if that contract ever loosens; the HTTP
    // contract for an empty list is 204 regardless.
    if records.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<RecordResponse> = records.into_iter().map(RecordResponse::from).collect();
    Ok(Json(body).into_response())
}

pub async fn update_record_handler(
    State(state): State<AppState>,
    Path((key, value)): Path<(RecordKey, String)>,
) -> Result<StatusCode> {
    state.service().update(key, value).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_record_handler(
    State(state): State<AppState>,
    Path(key): Path<RecordKey>,
) -> Result<StatusCode> {
    state.service().delete(key).await?;
    Ok(StatusCode::OK)
}
