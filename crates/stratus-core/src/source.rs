//! The `WeatherSource` trait — the upstream weather provider seen from the
//! API layer.
//!
//! Payloads are passed through as opaque JSON; nothing downstream depends on
//! their shape except the optional `name` and `main.temp` lookups.

use std::future::Future;

use serde_json::Value;

use crate::location::LocationQuery;

pub trait WeatherSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Current conditions for `query`.
  fn fetch_current<'a>(
    &'a self,
    query: &'a LocationQuery,
  ) -> impl Future<Output = Result<Value, Self::Error>> + Send + 'a;

  /// The 5-day / 3-hour forecast for `query`.
  fn fetch_forecast<'a>(
    &'a self,
    query: &'a LocationQuery,
  ) -> impl Future<Output = Result<Value, Self::Error>> + Send + 'a;
}
