use serde_json::Value as JsonValue;

use crate::dashboard::controller::FetchPanel;
use crate::dashboard::{DisplayItem, Notice, PanelKind, RenderContext};
use crate::mappers::{MapError, map_rover_photos};
use crate::services::space_apis::Query;

/// Fetches only when "Get Mars Photos" was pressed.
pub struct RoverPanel;

impl FetchPanel for RoverPanel {
    const KIND: PanelKind = PanelKind::RoverPhotos;
    const FAILURE_MESSAGE: &'static str =
        "Failed to fetch Mars photos. Check your internet or try again later.";

    fn query(&self, ctx: &RenderContext) -> Option<Query> {
        ctx.fetch_requested.then_some(Query::RoverPhotos {
            rover: ctx.rover,
            sol: ctx.sol,
        })
    }

    fn map(&self, payload: JsonValue, _ctx: &RenderContext) -> Result<Vec<DisplayItem>, MapError> {
        map_rover_photos(payload)
    }

    fn soft_notice(&self, _err: &MapError) -> Notice {
        Notice::warning("No photos found for that Sol. Try a different day.")
    }
}
