//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Only caller mistakes are reported in detail. Upstream and store failures
//! answer with the endpoint's fixed message; the underlying error is logged.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("{message}: {source}")]
  Upstream {
    message: &'static str,
    #[source]
    source:  BoxError,
  },

  #[error("{message}: {source}")]
  Store {
    message: &'static str,
    #[source]
    source:  BoxError,
  },
}

impl ApiError {
  /// `map_err` adapter for weather-provider failures.
  pub fn upstream<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| Self::Upstream { message, source: Box::new(e) }
  }

  /// `map_err` adapter for record-store failures.
  pub fn store<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| Self::Store { message, source: Box::new(e) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::Upstream { message, source } => {
        tracing::error!(error = %source, "upstream weather request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
      }
      ApiError::Store { message, source } => {
        tracing::error!(error = %source, "record store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
