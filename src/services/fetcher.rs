//! HTTP fetcher for upstream JSON APIs
//!
//! One GET per call, no retries, no caching. Non-2xx statuses, transport
//! failures and unparseable bodies each map to their own [FetchError] kind so
//! the panel controllers can decide what to show.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure of a single upstream request
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a status outside [200, 299]
    #[error("upstream returned HTTP {0}")]
    Http(u16),

    /// The request never produced a response (DNS, connect, TLS, body read)
    #[error("network error: {0}")]
    Network(String),

    /// The body was not valid JSON
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short kind label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Http(_) => "http",
            FetchError::Network(_) => "network",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Anything that can GET a URL with query parameters and hand back JSON.
///
/// The HTTP implementation is [HttpFetcher]; tests substitute stubs.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch(&self, url: &str, params: &[(&str, String)]) -> Result<JsonValue, FetchError>;
}

/// reqwest-backed fetcher using the transport's default timeouts
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, params: &[(&str, String)]) -> Result<JsonValue, FetchError> {
        // Query parameters carry the API key, so only the bare URL is logged.
        debug!(url = %url, "Fetching upstream JSON");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                warn!(url = %url, error = %e, "Upstream request failed");
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Upstream returned non-success status");
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            let e = e.without_url();
            warn!(url = %url, error = %e, "Failed to read upstream body");
            FetchError::Network(e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(url = %url, error = %e, "Upstream body is not valid JSON");
            FetchError::Decode(e.to_string())
        })
    }
}
