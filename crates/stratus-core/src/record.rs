//! Weather records — one persisted document per completed current-weather
//! lookup.
//!
//! `id` and `date` are assigned by the store and never change. The upstream
//! payload is kept verbatim and is never rewritten after creation; only the
//! display `location` may be edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A stored weather lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
  pub id:           Uuid,
  /// Resolved place name, or the raw input when the upstream gave none.
  pub location:     String,
  /// The full upstream response, stored as-is.
  pub weather_data: Value,
  /// Server-assigned insertion time.
  pub date:         DateTime<Utc>,
}

impl WeatherRecord {
  /// The current temperature from `weatherData.main.temp`, if the payload
  /// carries a non-null one.
  pub fn temperature(&self) -> Option<&Value> {
    self
      .weather_data
      .get("main")
      .and_then(|main| main.get("temp"))
      .filter(|temp| !temp.is_null())
  }
}

/// Pick the display name for a new record: the upstream `name` when it is a
/// non-empty string, otherwise `fallback`.
pub fn resolved_location(weather_data: &Value, fallback: &str) -> String {
  weather_data
    .get("name")
    .and_then(Value::as_str)
    .filter(|name| !name.is_empty())
    .unwrap_or(fallback)
    .to_owned()
}
