//! Error type for `stratus-owm`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OwmError {
  /// The HTTP client could not be built or the request never completed.
  #[error("request failed: {0}")]
  Request(#[from] reqwest::Error),

  /// The upstream answered with a non-success status.
  #[error("upstream returned {status}: {body}")]
  Status {
    status: reqwest::StatusCode,
    body:   String,
  },

  /// The upstream answered 2xx but the body was not JSON.
  #[error("invalid upstream JSON: {0}")]
  Parse(#[from] serde_json::Error),
}

pub type Result<T, E = OwmError> = std::result::Result<T, E>;
