use serde_json::Value as JsonValue;

use crate::dashboard::controller::FetchPanel;
use crate::dashboard::{DisplayItem, Notice, PanelKind, RenderContext};
use crate::mappers::{MapError, map_apod};
use crate::services::space_apis::Query;

/// Fetches on every render: the date picker always holds a value.
pub struct ApodPanel;

impl FetchPanel for ApodPanel {
    const KIND: PanelKind = PanelKind::Apod;
    const FAILURE_MESSAGE: &'static str =
        "Failed to fetch APOD. Try another date (APOD started June 16, 1995).";

    fn query(&self, ctx: &RenderContext) -> Option<Query> {
        Some(Query::Apod {
            date: ctx.apod_date,
        })
    }

    fn map(&self, payload: JsonValue, _ctx: &RenderContext) -> Result<Vec<DisplayItem>, MapError> {
        map_apod(payload)
    }

    fn soft_notice(&self, _err: &MapError) -> Notice {
        Notice::warning("Media type not supported.")
    }
}
