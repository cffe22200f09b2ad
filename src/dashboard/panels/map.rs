use crate::dashboard::controller::{PanelEvent, PanelView};
use crate::dashboard::{DisplayItem, Notice, PanelKind, RenderContext};
use crate::mappers::format_coordinates;

/// Initial map centre (lat, lng) and zoom level
pub const MAP_CENTER: (f64, f64) = (9.0820, 8.6753);
pub const MAP_ZOOM: u8 = 5;

/// Report the last map click, if any. No upstream is involved.
pub fn run_map_panel(ctx: &RenderContext) -> PanelView {
    let mut view = PanelView::new(PanelKind::Map);
    view.advance(PanelEvent::Selected);

    match ctx.last_click {
        Some(click) => {
            view.advance(PanelEvent::Submitted);
            view.notices.push(Notice::success(format!(
                "📍 Selected Coordinates: {}",
                format_coordinates(click)
            )));
            view.items.push(DisplayItem::text(
                "You can now use this in APIs like weather, ISS tracker, or space imagery.",
            ));
            view.advance(PanelEvent::Succeeded);
        }
        None => {
            view.notices
                .push(Notice::info("Click anywhere on the map to get coordinates."));
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::panels::test_support::context;
    use crate::dashboard::{LatLng, PanelPhase};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_without_click() {
        let view = run_map_panel(&context());
        assert_eq!(view.phase, PanelPhase::AwaitingInput);
        assert_eq!(
            view.notices,
            vec![Notice::info("Click anywhere on the map to get coordinates.")]
        );
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_with_click() {
        let ctx = RenderContext {
            last_click: Some(LatLng {
                lat: 9.08204,
                lng: 8.67534,
            }),
            ..context()
        };
        let view = run_map_panel(&ctx);

        assert_eq!(view.phase, PanelPhase::Rendered);
        assert_eq!(
            view.notices,
            vec![Notice::success(
                "📍 Selected Coordinates: Latitude = 9.0820, Longitude = 8.6753"
            )]
        );
        assert_eq!(view.items.len(), 1);
    }
}
