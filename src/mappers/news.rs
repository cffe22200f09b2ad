//! Space news mapper

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::{MapError, decode};
use crate::dashboard::DisplayItem;

/// Summaries are cut to this many characters before the ellipsis
pub const SUMMARY_MAX_CHARS: usize = 200;
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Deserialize)]
struct NewsPayload {
    #[serde(default)]
    results: Vec<JsonValue>,
}

#[derive(Debug, Deserialize)]
struct PublishedOnly {
    published_at: String,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: String,
    url: String,
    image_url: Option<String>,
    published_at: String,
    summary: Option<String>,
}

/// Cut a summary to [SUMMARY_MAX_CHARS] characters and append [ELLIPSIS].
///
/// The ellipsis is appended even when nothing was cut.
pub fn truncate_summary(summary: &str) -> String {
    let mut out: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Map an article listing to display items for the articles published on
/// `today` (UTC).
///
/// An article qualifies when its `published_at` starts with `today` formatted
/// as `YYYY-MM-DD`. Each one yields a Link, an Image when `image_url` is set,
/// the publication timestamp and the truncated summary. No qualifying
/// articles is an empty, successful result.
pub fn map_news(payload: JsonValue, today: NaiveDate) -> Result<Vec<DisplayItem>, MapError> {
    let payload: NewsPayload = decode(payload, "news")?;
    let today = today.format("%Y-%m-%d").to_string();

    let mut items = Vec::new();
    for raw in payload.results {
        let published: PublishedOnly = decode(raw.clone(), "news article")?;
        if !published.published_at.starts_with(&today) {
            continue;
        }

        let article: Article = decode(raw, "news article")?;
        items.push(DisplayItem::Link {
            title: article.title,
            url: article.url,
        });
        if let Some(image_url) = article.image_url.filter(|u| !u.is_empty()) {
            items.push(DisplayItem::image(image_url, None));
        }
        items.push(DisplayItem::text(format!(
            "🕒 Published: {}",
            article.published_at
        )));
        items.push(DisplayItem::text(truncate_summary(
            article.summary.as_deref().unwrap_or_default(),
        )));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
    }

    fn article(id: u32, published_at: &str, image_url: Option<&str>) -> JsonValue {
        json!({
            "id": id,
            "title": format!("Article {id}"),
            "url": format!("https://news.example/{id}"),
            "image_url": image_url,
            "news_site": "Example",
            "summary": format!("Summary {id}"),
            "published_at": published_at,
        })
    }

    fn links(items: &[DisplayItem]) -> Vec<String> {
        items
            .iter()
            .filter_map(|item| match item {
                DisplayItem::Link { title, .. } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_filters_to_today_by_prefix() {
        let payload = json!({"count": 4, "results": [
            article(1, "2025-07-04T00:00:01Z", None),
            article(2, "2025-07-03T23:59:59Z", None),
            article(3, "2025-07-04T18:30:00.123Z", None),
            article(4, "2025-07-05T00:00:00Z", None),
        ]});

        let items = map_news(payload, today()).unwrap();
        assert_eq!(links(&items), vec!["Article 1", "Article 3"]);
    }

    #[test]
    fn test_article_items() {
        let payload = json!({"results": [
            article(1, "2025-07-04T10:00:00Z", Some("https://img.example/1.jpg")),
            article(2, "2025-07-04T11:00:00Z", Some("")),
        ]});

        let items = map_news(payload, today()).unwrap();
        assert_eq!(
            items,
            vec![
                DisplayItem::Link {
                    title: "Article 1".into(),
                    url: "https://news.example/1".into()
                },
                DisplayItem::image("https://img.example/1.jpg", None),
                DisplayItem::text("🕒 Published: 2025-07-04T10:00:00Z"),
                DisplayItem::text("Summary 1..."),
                DisplayItem::Link {
                    title: "Article 2".into(),
                    url: "https://news.example/2".into()
                },
                DisplayItem::text("🕒 Published: 2025-07-04T11:00:00Z"),
                DisplayItem::text("Summary 2..."),
            ]
        );
    }

    #[test]
    fn test_no_articles_today_is_empty_ok() {
        let payload = json!({"results": [article(1, "2020-01-01T00:00:00Z", None)]});
        assert_eq!(map_news(payload, today()), Ok(vec![]));
        assert_eq!(map_news(json!({"results": []}), today()), Ok(vec![]));
        assert_eq!(map_news(json!({}), today()), Ok(vec![]));
    }

    #[test]
    fn test_article_without_published_at_is_schema_error() {
        let payload = json!({"results": [{"title": "x", "url": "y"}]});
        assert!(matches!(map_news(payload, today()), Err(MapError::Schema(_))));
    }

    #[test]
    fn test_truncate_long_summary() {
        let long = "a".repeat(250);
        let out = truncate_summary(&long);
        assert_eq!(out, format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn test_truncate_short_summary_still_gets_ellipsis() {
        assert_eq!(truncate_summary("Short."), "Short....");
        assert_eq!(truncate_summary(""), "...");
        let exact = "b".repeat(200);
        assert_eq!(truncate_summary(&exact), format!("{exact}..."));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let long = "é".repeat(201);
        let out = truncate_summary(&long);
        assert_eq!(out.chars().count(), 203);
        assert!(out.starts_with(&"é".repeat(200)));
    }
}
