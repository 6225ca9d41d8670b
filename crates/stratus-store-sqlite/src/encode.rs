//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (microsecond
//! precision, `Z` suffix) so that lexical order in SQL matches chronological
//! order. Payloads are stored as compact JSON. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use stratus_core::record::WeatherRecord;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `weather_records` row.
pub struct RawRecord {
  pub record_id:    String,
  pub location:     String,
  pub weather_data: String,
  pub recorded_at:  String,
}

impl RawRecord {
  pub const COLUMNS: &'static str = "record_id, location, weather_data, recorded_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      record_id:    row.get(0)?,
      location:     row.get(1)?,
      weather_data: row.get(2)?,
      recorded_at:  row.get(3)?,
    })
  }

  pub fn into_record(self) -> Result<WeatherRecord> {
    Ok(WeatherRecord {
      id:           decode_uuid(&self.record_id)?,
      location:     self.location,
      weather_data: serde_json::from_str(&self.weather_data)?,
      date:         decode_dt(&self.recorded_at)?,
    })
  }
}
