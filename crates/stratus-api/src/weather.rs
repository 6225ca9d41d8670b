//! Handlers for the upstream lookup endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/weather` | Body: `{"location":"..."}`; records the lookup |
//! | `POST` | `/forecast` | Body: `{"location":"..."}`; nothing is recorded |
//!
//! `location` is a place name or a `lat,lon` pair. Invalid input is rejected
//! before the upstream is contacted.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::Value;
use stratus_core::{
  location::LocationQuery,
  record::resolved_location,
  source::WeatherSource,
  store::RecordStore,
};

use crate::{AppState, error::ApiError};

const WEATHER_FAILED: &str =
  "Failed to fetch weather data. Please check city name or try again.";
const FORECAST_FAILED: &str =
  "Failed to fetch 5-day forecast. Please check city name or try again.";

/// JSON body accepted by the lookup endpoints and by `PUT /history/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct LocationBody {
  pub location: Option<String>,
}

impl LocationBody {
  /// The `location` field of a request body. An unreadable body counts as an
  /// absent location.
  pub(crate) fn extract(body: Result<Json<Self>, JsonRejection>) -> String {
    body
      .ok()
      .and_then(|Json(b)| b.location)
      .unwrap_or_default()
  }
}

fn parse_query(body: Result<Json<LocationBody>, JsonRejection>) -> Result<LocationQuery, ApiError> {
  LocationQuery::parse(&LocationBody::extract(body))
    .map_err(|e| ApiError::BadRequest(e.to_string()))
}

// ─── Current ──────────────────────────────────────────────────────────────────

/// `POST /weather` — returns the upstream payload verbatim.
///
/// A record is stored for every successful lookup. If the fetch succeeds but
/// the save fails, the payload is still returned and the failure is logged.
pub async fn current<S, W>(
  State(state): State<AppState<S, W>>,
  body: Result<Json<LocationBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore,
  W: WeatherSource,
{
  let query = parse_query(body)?;

  let data = state
    .weather
    .fetch_current(&query)
    .await
    .map_err(ApiError::upstream(WEATHER_FAILED))?;

  let location = resolved_location(&data, &query.fallback_name());
  match state.store.create_record(location, data.clone()).await {
    Ok(record) => {
      tracing::info!(id = %record.id, location = %record.location, "recorded weather lookup");
    }
    Err(e) => {
      tracing::warn!(error = %e, "weather fetched but the history record was not saved");
    }
  }

  Ok(Json(data))
}

// ─── Forecast ─────────────────────────────────────────────────────────────────

/// `POST /forecast` — returns the upstream 5-day forecast verbatim.
pub async fn forecast<S, W>(
  State(state): State<AppState<S, W>>,
  body: Result<Json<LocationBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore,
  W: WeatherSource,
{
  let query = parse_query(body)?;

  let data = state
    .weather
    .fetch_forecast(&query)
    .await
    .map_err(ApiError::upstream(FORECAST_FAILED))?;

  Ok(Json(data))
}
