//! Bulk export of weather records as JSON or CSV.
//!
//! CSV output is a fixed three-column projection (`location,date,temp`);
//! JSON output is the full record list. Export never fails because of what
//! an individual payload does or does not contain.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{Error, Result, record::WeatherRecord};

/// Placeholder written when a record carries no temperature.
pub const MISSING_TEMP: &str = "N/A";

/// File name suggested to browsers for CSV downloads.
pub const CSV_FILENAME: &str = "weather-history.csv";

const CSV_HEADER: [&str; 3] = ["location", "date", "temp"];

/// Requested export encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
  #[default]
  Json,
  Csv,
}

impl ExportFormat {
  /// Map the `?format=` query value. Anything other than `csv` is JSON.
  pub fn parse(raw: Option<&str>) -> Self {
    match raw {
      Some(f) if f.trim().eq_ignore_ascii_case("csv") => Self::Csv,
      _ => Self::Json,
    }
  }
}

/// An encoded export body plus the metadata needed to serve it.
#[derive(Debug, Clone)]
pub struct Export {
  pub content_type: &'static str,
  /// Set when the body should be served as a download.
  pub filename:     Option<&'static str>,
  pub body:         Vec<u8>,
}

/// Encode `records` in `format`.
pub fn export(records: &[WeatherRecord], format: ExportFormat) -> Result<Export> {
  match format {
    ExportFormat::Json => Ok(Export {
      content_type: "application/json",
      filename:     None,
      body:         serde_json::to_vec(records)?,
    }),
    ExportFormat::Csv => Ok(Export {
      content_type: "text/csv",
      filename:     Some(CSV_FILENAME),
      body:         to_csv(records)?,
    }),
  }
}

fn to_csv(records: &[WeatherRecord]) -> Result<Vec<u8>> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(CSV_HEADER)?;

  for record in records {
    let date = locale_date(record.date);
    let temp = record
      .temperature()
      .map(render_temp)
      .unwrap_or_else(|| MISSING_TEMP.to_owned());
    writer.write_record([record.location.as_str(), date.as_str(), temp.as_str()])?;
  }

  writer
    .into_inner()
    .map_err(|e| Error::Csv(e.into_error().into()))
}

/// en-US locale rendering, e.g. `3/7/2025, 2:05:09 PM`.
fn locale_date(dt: DateTime<Utc>) -> String {
  dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

fn render_temp(temp: &Value) -> String {
  match temp {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use serde_json::json;
  use uuid::Uuid;

  use super::*;

  fn record(location: &str, weather_data: Value) -> WeatherRecord {
    WeatherRecord {
      id: Uuid::new_v4(),
      location: location.into(),
      weather_data,
      date: Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap(),
    }
  }

  fn csv_lines(records: &[WeatherRecord]) -> Vec<String> {
    let out = export(records, ExportFormat::Csv).unwrap();
    String::from_utf8(out.body)
      .unwrap()
      .lines()
      .map(str::to_owned)
      .collect()
  }

  #[test]
  fn format_parse_defaults_to_json() {
    assert_eq!(ExportFormat::parse(None), ExportFormat::Json);
    assert_eq!(ExportFormat::parse(Some("json")), ExportFormat::Json);
    assert_eq!(ExportFormat::parse(Some("xml")), ExportFormat::Json);
    assert_eq!(ExportFormat::parse(Some("CSV")), ExportFormat::Csv);
  }

  #[test]
  fn csv_has_fixed_header_and_temperature() {
    let lines = csv_lines(&[record("Berlin", json!({ "main": { "temp": 21.3 } }))]);
    assert_eq!(lines[0], "location,date,temp");
    assert_eq!(lines[1], "Berlin,\"3/7/2025, 2:05:09 PM\",21.3");
  }

  #[test]
  fn csv_missing_temperature_is_na() {
    let lines = csv_lines(&[
      record("Oslo", json!({ "main": {} })),
      record("Rome", json!(null)),
      record("Lima", json!({ "main": { "temp": null } })),
    ]);
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("Oslo,") && lines[1].ends_with(",N/A"));
    assert!(lines[2].ends_with(",N/A"));
    assert!(lines[3].ends_with(",N/A"));
  }

  #[test]
  fn csv_quotes_awkward_locations() {
    let lines = csv_lines(&[record("Washington, D.C.", json!({ "main": { "temp": 5 } }))]);
    assert!(lines[1].starts_with("\"Washington, D.C.\","));
    assert!(lines[1].ends_with(",5"));
  }

  #[test]
  fn csv_sets_download_metadata() {
    let out = export(&[], ExportFormat::Csv).unwrap();
    assert_eq!(out.content_type, "text/csv");
    assert_eq!(out.filename, Some(CSV_FILENAME));
  }

  #[test]
  fn json_export_is_the_full_record_list() {
    let records = vec![record("Berlin", json!({ "main": { "temp": 1.5 }, "id": 42 }))];
    let out = export(&records, ExportFormat::Json).unwrap();
    assert_eq!(out.content_type, "application/json");
    assert!(out.filename.is_none());
    let parsed: Vec<WeatherRecord> = serde_json::from_slice(&out.body).unwrap();
    assert_eq!(parsed, records);
  }

  #[test]
  fn locale_date_uses_twelve_hour_clock() {
    let midnight = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 1).unwrap();
    assert_eq!(locale_date(midnight), "12/31/2024, 12:00:01 AM");
  }
}
