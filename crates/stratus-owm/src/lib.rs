//! OpenWeatherMap client for Stratus.
//!
//! Implements [`stratus_core::source::WeatherSource`] over the free
//! `data/2.5` endpoints: `weather` for current conditions and `forecast`
//! for the 5-day / 3-hour forecast. Responses are returned as raw JSON.

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, OwmClient, OwmConfig};
pub use error::{OwmError, Result};
