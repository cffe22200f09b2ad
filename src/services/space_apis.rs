//! Upstream endpoints: NASA (APOD, Mars rover photos) and Spaceflight News
//!
//! NASA endpoints take the configured API key; the news feed is keyless.
//! Base URLs come from [Config](crate::config::Config) so tests can point them
//! at a mock server.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value as JsonValue;

use super::fetcher::{FetchError, JsonFetcher};
use crate::config::Config;
use crate::dashboard::Rover;

/// Number of articles requested from the news feed
pub const NEWS_ARTICLE_LIMIT: u32 = 20;

/// Parameters for one outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Apod { date: NaiveDate },
    RoverPhotos { rover: Rover, sol: u32 },
    Articles { limit: u32 },
}

/// Endpoint table over a shared [JsonFetcher]
#[derive(Clone)]
pub struct SpaceApis {
    fetcher: Arc<dyn JsonFetcher>,
    nasa_api_url: String,
    space_news_api_url: String,
    api_key: String,
}

impl SpaceApis {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, config: &Config) -> Self {
        Self {
            fetcher,
            nasa_api_url: config.nasa_api_url.clone(),
            space_news_api_url: config.space_news_api_url.clone(),
            api_key: config.nasa_api_key.clone(),
        }
    }

    /// URL (without query string) and parameters for a query
    pub fn request_for(&self, query: &Query) -> (String, Vec<(&'static str, String)>) {
        match query {
            Query::Apod { date } => (
                format!("{}/planetary/apod", self.nasa_api_url),
                vec![
                    ("api_key", self.api_key.clone()),
                    ("date", date.format("%Y-%m-%d").to_string()),
                ],
            ),
            Query::RoverPhotos { rover, sol } => (
                format!(
                    "{}/mars-photos/api/v1/rovers/{}/photos",
                    self.nasa_api_url,
                    rover.name()
                ),
                vec![("sol", sol.to_string()), ("api_key", self.api_key.clone())],
            ),
            Query::Articles { limit } => (
                format!("{}/articles/", self.space_news_api_url),
                vec![("limit", limit.to_string())],
            ),
        }
    }

    /// Issue exactly one upstream request for `query`.
    pub async fn fetch(&self, query: &Query) -> Result<JsonValue, FetchError> {
        let (url, params) = self.request_for(query);
        self.fetcher.fetch(&url, &params).await
    }
}
