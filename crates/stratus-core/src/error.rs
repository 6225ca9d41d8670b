//! Error types for `stratus-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Location is required")]
  MissingLocation,

  #[error("Invalid coordinates provided")]
  InvalidCoordinates,

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
