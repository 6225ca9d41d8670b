//! Handlers for `/history` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/history` | Newest first |
//! | `PUT`    | `/history/:id` | Body: `{"location":"..."}`; only the location changes |
//! | `DELETE` | `/history/:id` | Idempotent; unknown ids still succeed |
//! | `GET`    | `/history/export` | Optional `?format=json\|csv` (default `json`) |

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use stratus_core::{
  export::{ExportFormat, export as encode_export},
  record::WeatherRecord,
  source::WeatherSource,
  store::{RecordOrder, RecordStore},
};
use uuid::Uuid;

use crate::{AppState, error::ApiError, weather::LocationBody};

const LIST_FAILED: &str = "Failed to fetch history";
const UPDATE_FAILED: &str = "Failed to update record";
const DELETE_FAILED: &str = "Failed to delete record";
const EXPORT_FAILED: &str = "Failed to export data";

const DELETED: &str = "Record deleted successfully";

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /history`
pub async fn list<S, W>(
  State(state): State<AppState<S, W>>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError>
where
  S: RecordStore,
  W: WeatherSource,
{
  let records = state
    .store
    .list_records(RecordOrder::NewestFirst)
    .await
    .map_err(ApiError::store(LIST_FAILED))?;
  Ok(Json(records))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /history/:id` — returns the updated record.
///
/// An unknown or malformed id is a failed update, not a 404.
pub async fn update<S, W>(
  State(state): State<AppState<S, W>>,
  Path(raw_id): Path<String>,
  body: Result<Json<LocationBody>, JsonRejection>,
) -> Result<Json<WeatherRecord>, ApiError>
where
  S: RecordStore,
  W: WeatherSource,
{
  let location = LocationBody::extract(body).trim().to_owned();
  if location.is_empty() {
    return Err(ApiError::BadRequest(
      stratus_core::Error::MissingLocation.to_string(),
    ));
  }

  let id = Uuid::parse_str(&raw_id).map_err(ApiError::store(UPDATE_FAILED))?;

  let record = state
    .store
    .update_location(id, location)
    .await
    .map_err(ApiError::store(UPDATE_FAILED))?
    .ok_or_else(|| ApiError::Store {
      message: UPDATE_FAILED,
      source:  format!("record {id} not found").into(),
    })?;
  Ok(Json(record))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
  pub message: &'static str,
}

/// `DELETE /history/:id`
pub async fn remove<S, W>(
  State(state): State<AppState<S, W>>,
  Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError>
where
  S: RecordStore,
  W: WeatherSource,
{
  // No record can carry a malformed id, so there is nothing to delete.
  if let Ok(id) = Uuid::parse_str(&raw_id) {
    let removed = state
      .store
      .delete_record(id)
      .await
      .map_err(ApiError::store(DELETE_FAILED))?;
    if !removed {
      tracing::debug!(%id, "delete requested for unknown record");
    }
  }

  Ok(Json(DeleteResponse { message: DELETED }))
}

// ─── Export ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportParams {
  pub format: Option<String>,
}

/// `GET /history/export[?format=csv]`
pub async fn export<S, W>(
  State(state): State<AppState<S, W>>,
  Query(params): Query<ExportParams>,
) -> Result<Response, ApiError>
where
  S: RecordStore,
  W: WeatherSource,
{
  let format = ExportFormat::parse(params.format.as_deref());

  let records = state
    .store
    .list_records(RecordOrder::Insertion)
    .await
    .map_err(ApiError::store(EXPORT_FAILED))?;

  let encoded = encode_export(&records, format).map_err(ApiError::store(EXPORT_FAILED))?;

  let mut response = (
    StatusCode::OK,
    [(header::CONTENT_TYPE, encoded.content_type)],
    encoded.body,
  )
    .into_response();

  if let Some(filename) = encoded.filename {
    let disposition = HeaderValue::from_str(&format!("attachment; filename={filename}"))
      .map_err(ApiError::store(EXPORT_FAILED))?;
    response
      .headers_mut()
      .insert(header::CONTENT_DISPOSITION, disposition);
  }

  Ok(response)
}
