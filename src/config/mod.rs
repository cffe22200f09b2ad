//! Application configuration management

use std::env;
use std::fmt;

use anyhow::{Context, Result};

/// NASA's public, heavily rate-limited key. Deployments inject their own.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Log output format for the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("pretty") | Some("text") => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    /// Public host (for the startup log line only)
    pub host: Option<String>,

    /// Server port
    pub port: u16,

    /// api.nasa.gov credential, appended to APOD and rover requests
    pub nasa_api_key: String,

    /// Base URL for APOD and Mars rover photos
    pub nasa_api_url: String,

    /// Base URL for the Spaceflight News API (including the version segment)
    pub space_news_api_url: String,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").ok(),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8501".to_string())
                .parse()
                .context("Invalid PORT")?,

            nasa_api_key: env::var("NASA_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .unwrap_or_else(|| DEMO_API_KEY.to_string()),

            nasa_api_url: base_url_var("NASA_API_URL", "https://api.nasa.gov"),

            space_news_api_url: base_url_var(
                "SPACE_NEWS_API_URL",
                "https://api.spaceflightnewsapi.net/v4",
            ),

            log_format: LogFormat::from_env_value(env::var("LOG_FORMAT").ok().as_deref()),
        })
    }
}

// The API key never reaches logs, even at debug level.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("nasa_api_key", &"<redacted>")
            .field("nasa_api_url", &self.nasa_api_url)
            .field("space_news_api_url", &self.space_news_api_url)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Read a base URL, dropping any trailing slash so paths can be appended.
fn base_url_var(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
