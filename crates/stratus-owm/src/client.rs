//! HTTP client for the OpenWeatherMap `data/2.5` API.

use std::fmt;

use reqwest::Client;
use serde_json::Value;
use stratus_core::{location::LocationQuery, source::WeatherSource};
use tracing::{debug, instrument};

use crate::{OwmError, Result};

/// Production endpoint for the free OpenWeatherMap API.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const CURRENT_ENDPOINT: &str = "weather";
const FORECAST_ENDPOINT: &str = "forecast";

/// Longest upstream error body kept in an [`OwmError::Status`].
const MAX_ERROR_BODY: usize = 200;

/// Connection settings for OpenWeatherMap.
#[derive(Clone)]
pub struct OwmConfig {
  pub api_key:  String,
  /// Base URL without a trailing endpoint, e.g. [`DEFAULT_BASE_URL`].
  pub base_url: String,
}

impl OwmConfig {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key:  api_key.into(),
      base_url: DEFAULT_BASE_URL.to_owned(),
    }
  }
}

impl fmt::Debug for OwmConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OwmConfig")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .finish()
  }
}

/// Async OpenWeatherMap client.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct OwmClient {
  client: Client,
  config: OwmConfig,
}

impl OwmClient {
  pub fn new(config: OwmConfig) -> Result<Self> {
    let client = Client::builder()
      .user_agent(concat!("stratus/", env!("CARGO_PKG_VERSION")))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, endpoint: &str) -> String {
    format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
  }

  /// Query parameters for `query`: `lat`/`lon` or `q`, then the API key and
  /// metric units.
  fn params(&self, query: &LocationQuery) -> Vec<(&'static str, String)> {
    let mut params = match query {
      LocationQuery::Place(name) => vec![("q", name.clone())],
      LocationQuery::Coordinates { lat, lon } => {
        vec![("lat", lat.to_string()), ("lon", lon.to_string())]
      }
    };
    params.push(("appid", self.config.api_key.clone()));
    params.push(("units", "metric".to_owned()));
    params
  }

  #[instrument(skip(self, query), fields(location = %query))]
  async fn fetch(&self, endpoint: &'static str, query: &LocationQuery) -> Result<Value> {
    let url = self.url(endpoint);
    debug!(%url, "querying OpenWeatherMap");

    let resp = self
      .client
      .get(&url)
      .query(&self.params(query))
      .send()
      .await?;

    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
      return Err(OwmError::Status {
        status,
        body: truncate_body(&body),
      });
    }

    Ok(serde_json::from_str(&body)?)
  }
}

impl WeatherSource for OwmClient {
  type Error = OwmError;

  async fn fetch_current(&self, query: &LocationQuery) -> Result<Value> {
    self.fetch(CURRENT_ENDPOINT, query).await
  }

  async fn fetch_forecast(&self, query: &LocationQuery) -> Result<Value> {
    self.fetch(FORECAST_ENDPOINT, query).await
  }
}

fn truncate_body(body: &str) -> String {
  if body.chars().count() > MAX_ERROR_BODY {
    let head: String = body.chars().take(MAX_ERROR_BODY).collect();
    format!("{head}...")
  } else {
    body.to_owned()
  }
}
