//! Application state and HTTP router construction.
//!
//! Used by the binary entry point and by the integration tests to build the
//! Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::Config;
use crate::dashboard::Shell;
use crate::services::{HttpFetcher, JsonFetcher, SpaceApis};

/// Shared, read-only state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub shell: Shell,
}

impl AppState {
    /// State backed by the real HTTP fetcher.
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_fetcher(config, Arc::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(config: Arc<Config>, fetcher: Arc<dyn JsonFetcher>) -> Self {
        let apis = SpaceApis::new(fetcher, &config);
        Self {
            config,
            shell: Shell::new(apis),
        }
    }
}

/// Build the full Axum router: dashboard page, health check and tracing layer.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(api::dashboard::router())
        .merge(api::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
