//! The `RecordStore` trait.
//!
//! Implemented by storage backends (e.g. `stratus-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use serde_json::Value;
use uuid::Uuid;

use crate::record::WeatherRecord;

/// Ordering for [`RecordStore::list_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordOrder {
  /// Descending by `date`; ties go to the most recently inserted record.
  #[default]
  NewestFirst,
  /// Whatever order the backend stores records in.
  Insertion,
}

/// Abstraction over a Stratus record store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record. The store assigns `id` and `date`.
  fn create_record(
    &self,
    location: String,
    weather_data: Value,
  ) -> impl Future<Output = Result<WeatherRecord, Self::Error>> + Send + '_;

  /// Return every record in the requested order.
  fn list_records(
    &self,
    order: RecordOrder,
  ) -> impl Future<Output = Result<Vec<WeatherRecord>, Self::Error>> + Send + '_;

  /// Replace the `location` of a record, leaving every other field intact.
  /// Returns `None` if no record has this id.
  fn update_location(
    &self,
    id: Uuid,
    location: String,
  ) -> impl Future<Output = Result<Option<WeatherRecord>, Self::Error>> + Send + '_;

  /// Remove a record. Returns `false` if no record had this id.
  fn delete_record(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
