//! Shell: dispatches one render pass to the selected panel

use tracing::info;

use super::context::{PanelKind, RenderContext};
use super::controller::{PanelView, run_fetch_panel};
use super::panels::{ApodPanel, NewsPanel, RoverPanel, run_map_panel};
use crate::services::space_apis::SpaceApis;

/// Holds the shared upstream endpoints. The panel selection itself lives in
/// the per-request [RenderContext], so nothing carries over between renders.
#[derive(Clone)]
pub struct Shell {
    apis: SpaceApis,
}

impl Shell {
    pub fn new(apis: SpaceApis) -> Self {
        Self { apis }
    }

    /// Run exactly one panel controller for `ctx`.
    pub async fn render(&self, ctx: &RenderContext) -> PanelView {
        let view = match ctx.panel {
            PanelKind::Apod => run_fetch_panel(&ApodPanel, ctx, &self.apis).await,
            PanelKind::RoverPhotos => run_fetch_panel(&RoverPanel, ctx, &self.apis).await,
            PanelKind::News => run_fetch_panel(&NewsPanel, ctx, &self.apis).await,
            PanelKind::Map => run_map_panel(ctx),
        };

        info!(
            panel = ctx.panel.slug(),
            phase = ?view.phase,
            items = view.items.len(),
            "Rendered panel"
        );
        view
    }
}
