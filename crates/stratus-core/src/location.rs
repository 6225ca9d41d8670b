//! Parsing of user-supplied location input.
//!
//! A location is either a free-text place name or a `lat,lon` pair. Any
//! input containing a comma is treated as a coordinate pair and must parse
//! as one.

use std::fmt;

use crate::{Error, Result};

/// A validated location, ready to be sent upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
  /// A place-name query, e.g. `"London"`.
  Place(String),
  /// A latitude/longitude pair in decimal degrees.
  Coordinates { lat: f64, lon: f64 },
}

impl LocationQuery {
  /// Parse raw input. Surrounding whitespace is ignored.
  ///
  /// Fails with [`Error::MissingLocation`] on blank input and with
  /// [`Error::InvalidCoordinates`] when a comma-separated pair is not two
  /// in-range numbers.
  pub fn parse(input: &str) -> Result<Self> {
    let input = input.trim();
    if input.is_empty() {
      return Err(Error::MissingLocation);
    }

    if !input.contains(',') {
      return Ok(Self::Place(input.to_owned()));
    }

    let mut parts = input.split(',').map(str::trim);
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next())
    else {
      return Err(Error::InvalidCoordinates);
    };

    let lat = parse_degrees(lat, 90.0)?;
    let lon = parse_degrees(lon, 180.0)?;
    Ok(Self::Coordinates { lat, lon })
  }

  /// The name stored for a record when the upstream response has none.
  pub fn fallback_name(&self) -> String { self.to_string() }
}

impl fmt::Display for LocationQuery {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Place(name) => f.write_str(name),
      Self::Coordinates { lat, lon } => write!(f, "{lat},{lon}"),
    }
  }
}

fn parse_degrees(s: &str, limit: f64) -> Result<f64> {
  s.parse::<f64>()
    .ok()
    .filter(|v| v.is_finite() && (-limit..=limit).contains(v))
    .ok_or(Error::InvalidCoordinates)
}
