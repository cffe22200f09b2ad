//! Astronomy Picture of the Day mapper

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::{MapError, decode};
use crate::dashboard::DisplayItem;

#[derive(Debug, Deserialize)]
struct ApodPayload {
    media_type: String,
    url: Option<String>,
    title: Option<String>,
    explanation: Option<String>,
}

/// Map an APOD payload to one media item followed by the explanation text.
///
/// `image` becomes an Image captioned with the title and `video` becomes a
/// Video. Any other media type yields [MapError::Unsupported] carrying only the
/// explanation.
pub fn map_apod(payload: JsonValue) -> Result<Vec<DisplayItem>, MapError> {
    let apod: ApodPayload = decode(payload, "apod")?;
    let explanation = DisplayItem::text(apod.explanation.unwrap_or_default());

    let media = match apod.media_type.as_str() {
        "image" => DisplayItem::image(require_url(apod.url)?, apod.title),
        "video" => DisplayItem::Video {
            url: require_url(apod.url)?,
        },
        other => {
            return Err(MapError::Unsupported {
                media_type: other.to_string(),
                remaining: vec![explanation],
            });
        }
    };

    Ok(vec![media, explanation])
}

fn require_url(url: Option<String>) -> Result<String, MapError> {
    url.filter(|u| !u.is_empty())
        .ok_or_else(|| MapError::Schema("apod: missing media url".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_image() {
        let items = map_apod(json!({
            "media_type": "image",
            "url": "https://apod.nasa.gov/apod/image/2401/pillars.jpg",
            "title": "Pillars of Creation",
            "explanation": "Star-forming columns.",
            "date": "2024-01-02"
        }))
        .unwrap();

        assert_eq!(
            items,
            vec![
                DisplayItem::image(
                    "https://apod.nasa.gov/apod/image/2401/pillars.jpg",
                    Some("Pillars of Creation".to_string())
                ),
                DisplayItem::text("Star-forming columns."),
            ]
        );
    }

    #[test]
    fn test_video() {
        let items = map_apod(json!({
            "media_type": "video",
            "url": "https://www.youtube.com/embed/abc123",
            "title": "A Launch",
            "explanation": "Liftoff."
        }))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            DisplayItem::Video {
                url: "https://www.youtube.com/embed/abc123".to_string()
            }
        );
        assert_eq!(items[1], DisplayItem::text("Liftoff."));
    }

    #[test]
    fn test_unsupported_media_keeps_explanation() {
        let err = map_apod(json!({
            "media_type": "other",
            "title": "Interactive",
            "explanation": "Try the interactive version."
        }))
        .unwrap_err();

        match err {
            MapError::Unsupported {
                media_type,
                remaining,
            } => {
                assert_eq!(media_type, "other");
                assert_eq!(remaining, vec![DisplayItem::text("Try the interactive version.")]);
                assert!(!remaining.iter().any(DisplayItem::is_media));
            }
            other => panic!("expected Unsupported, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_media_type_is_schema_error() {
        let err = map_apod(json!({"url": "x", "explanation": "y"})).unwrap_err();
        assert!(matches!(err, MapError::Schema(_)));
        assert!(!err.is_soft());
    }

    #[test]
    fn test_image_without_url_is_schema_error() {
        let err = map_apod(json!({"media_type": "image", "explanation": "y"})).unwrap_err();
        assert!(matches!(err, MapError::Schema(_)));
    }

    #[test]
    fn test_missing_explanation_still_emits_text() {
        let items = map_apod(json!({"media_type": "image", "url": "u"})).unwrap();
        assert_eq!(items[1], DisplayItem::text(""));
    }
}
