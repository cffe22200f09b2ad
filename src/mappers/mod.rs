//! Response mappers: pure functions from upstream JSON to display items

pub mod apod;
pub mod coordinates;
pub mod news;
pub mod rover;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::dashboard::DisplayItem;

pub use apod::map_apod;
pub use coordinates::format_coordinates;
pub use news::{map_news, truncate_summary};
pub use rover::map_rover_photos;

/// Why a payload could not be turned into the usual display items
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// APOD returned a media type we cannot embed. `remaining` holds the items
    /// that still apply (the explanation text).
    #[error("unsupported media type: {media_type}")]
    Unsupported {
        media_type: String,
        remaining: Vec<DisplayItem>,
    },

    /// The payload was well-formed but had nothing to show
    #[error("no results")]
    Empty,

    /// The payload lacked fields the mapper needs
    #[error("unexpected payload shape: {0}")]
    Schema(String),
}

impl MapError {
    /// Soft outcomes render as warnings next to whatever content remains;
    /// only schema errors count as a failed fetch.
    pub fn is_soft(&self) -> bool {
        !matches!(self, MapError::Schema(_))
    }
}

/// Deserialize a typed view of (part of) a payload.
fn decode<T: DeserializeOwned>(value: JsonValue, what: &str) -> Result<T, MapError> {
    serde_json::from_value(value).map_err(|e| MapError::Schema(format!("{what}: {e}")))
}
