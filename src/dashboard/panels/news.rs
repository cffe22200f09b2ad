use serde_json::Value as JsonValue;

use crate::dashboard::controller::FetchPanel;
use crate::dashboard::{DisplayItem, Notice, PanelKind, RenderContext};
use crate::mappers::{MapError, map_news};
use crate::services::space_apis::{NEWS_ARTICLE_LIMIT, Query};

/// Fetches only when "Load Today's Space News" was pressed.
pub struct NewsPanel;

impl FetchPanel for NewsPanel {
    const KIND: PanelKind = PanelKind::News;
    const FAILURE_MESSAGE: &'static str = "Unable to fetch space news.";

    fn query(&self, ctx: &RenderContext) -> Option<Query> {
        ctx.fetch_requested.then_some(Query::Articles {
            limit: NEWS_ARTICLE_LIMIT,
        })
    }

    fn map(&self, payload: JsonValue, ctx: &RenderContext) -> Result<Vec<DisplayItem>, MapError> {
        map_news(payload, ctx.today_utc)
    }

    // map_news never reports a soft error; an empty day is Ok(vec![]).
    fn soft_notice(&self, _err: &MapError) -> Notice {
        self.empty_notice()
            .unwrap_or_else(|| Notice::info("No articles to show."))
    }

    fn empty_notice(&self) -> Option<Notice> {
        Some(Notice::info(
            "No new articles published today. Come back tomorrow!",
        ))
    }
}
