//! JSON REST API for Stratus.
//!
//! Exposes an axum [`Router`] backed by any [`RecordStore`] and
//! [`WeatherSource`]. TLS and listener concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = stratus_api::app(AppState::new(store, client));
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod history;
pub mod weather;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use stratus_core::{source::WeatherSource, store::RecordStore};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S, W> {
  pub store:   Arc<S>,
  pub weather: Arc<W>,
}

impl<S, W> AppState<S, W> {
  pub fn new(store: S, weather: W) -> Self {
    Self {
      store:   Arc::new(store),
      weather: Arc::new(weather),
    }
  }
}

// Manual impl: `derive` would demand `S: Clone` and `W: Clone`.
impl<S, W> Clone for AppState<S, W> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      weather: Arc::clone(&self.weather),
    }
  }
}

// ─── Routers ──────────────────────────────────────────────────────────────────

/// Build the `/api` router.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, W>(state: AppState<S, W>) -> Router<()>
where
  S: RecordStore + 'static,
  W: WeatherSource + 'static,
{
  Router::new()
    // Upstream lookups
    .route("/weather", post(weather::current::<S, W>))
    .route("/forecast", post(weather::forecast::<S, W>))
    // History
    .route("/history", get(history::list::<S, W>))
    .route("/history/export", get(history::export::<S, W>))
    .route(
      "/history/{id}",
      put(history::update::<S, W>).delete(history::remove::<S, W>),
    )
    .with_state(state)
}

/// The complete application: liveness banner, `/api`, CORS, and request
/// tracing.
pub fn app<S, W>(state: AppState<S, W>) -> Router
where
  S: RecordStore + 'static,
  W: WeatherSource + 'static,
{
  Router::new()
    .route("/", get(root))
    .nest("/api", api_router(state))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

/// `GET /`
async fn root() -> &'static str { "Weather backend is up" }
