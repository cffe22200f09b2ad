//! Panel controller: per-panel state machine and the fetch → map pipeline
//!
//! A panel starts [Idle](PanelPhase::Idle), waits for input once selected, and
//! fetches only when its input calls for it. Every run ends in exactly one
//! [PanelView]; failures are turned into notices here and never propagate.

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use super::context::{PanelKind, RenderContext};
use super::display::{DisplayItem, Notice};
use crate::mappers::MapError;
use crate::services::space_apis::{Query, SpaceApis};

/// Lifecycle of a panel within one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Idle,
    AwaitingInput,
    Fetching,
    Rendered,
    Failed,
}

/// Inputs that move a panel between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The user picked this panel in the menu
    Selected,
    /// The input asks for content (date picked, button pressed, map clicked)
    Submitted,
    /// Fetch and mapping both produced something to show
    Succeeded,
    /// Fetch or mapping failed
    FetchFailed,
}

impl PanelPhase {
    /// Apply an event. Events that make no sense in the current phase leave
    /// it unchanged.
    pub fn next(self, event: PanelEvent) -> Self {
        match (self, event) {
            (PanelPhase::Idle, PanelEvent::Selected) => PanelPhase::AwaitingInput,
            (PanelPhase::AwaitingInput, PanelEvent::Submitted) => PanelPhase::Fetching,
            (PanelPhase::Fetching, PanelEvent::Succeeded) => PanelPhase::Rendered,
            (PanelPhase::Fetching, PanelEvent::FetchFailed) => PanelPhase::Failed,
            (phase, _) => phase,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PanelPhase::Rendered | PanelPhase::Failed)
    }
}

/// Result of one panel run, consumed by the page renderer
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub kind: PanelKind,
    pub phase: PanelPhase,
    pub notices: Vec<Notice>,
    pub items: Vec<DisplayItem>,
}

impl PanelView {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            phase: PanelPhase::Idle,
            notices: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn advance(&mut self, event: PanelEvent) {
        let next = self.phase.next(event);
        if next == self.phase {
            debug!(panel = self.kind.slug(), phase = ?self.phase, event = ?event, "Ignoring panel event");
        }
        self.phase = next;
    }

    /// Drop any content and end in [PanelPhase::Failed] with an error notice.
    fn fail(&mut self, message: &str) {
        self.items.clear();
        self.notices.push(Notice::error(message));
        self.advance(PanelEvent::FetchFailed);
    }
}

/// A panel whose content comes from one upstream request
pub trait FetchPanel {
    const KIND: PanelKind;

    /// Error shown when the request or mapping fails
    const FAILURE_MESSAGE: &'static str;

    /// The request this context calls for, or `None` to keep waiting for input.
    fn query(&self, ctx: &RenderContext) -> Option<Query>;

    fn map(&self, payload: JsonValue, ctx: &RenderContext) -> Result<Vec<DisplayItem>, MapError>;

    /// Notice for a soft mapping outcome (empty or unsupported payload)
    fn soft_notice(&self, err: &MapError) -> Notice;

    /// Notice for a successful mapping that produced nothing
    fn empty_notice(&self) -> Option<Notice> {
        None
    }
}

/// Drive a [FetchPanel] through one render pass. At most one upstream request
/// is made, and no mapper runs unless the fetch succeeded.
pub async fn run_fetch_panel<P: FetchPanel>(
    panel: &P,
    ctx: &RenderContext,
    apis: &SpaceApis,
) -> PanelView {
    let mut view = PanelView::new(P::KIND);
    view.advance(PanelEvent::Selected);

    let Some(query) = panel.query(ctx) else {
        return view;
    };
    view.advance(PanelEvent::Submitted);

    let payload = match apis.fetch(&query).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!(panel = P::KIND.slug(), kind = e.kind(), error = %e, "Panel fetch failed");
            view.fail(P::FAILURE_MESSAGE);
            return view;
        }
    };

    match panel.map(payload, ctx) {
        Ok(items) => {
            if items.is_empty()
                && let Some(notice) = panel.empty_notice()
            {
                view.notices.push(notice);
            }
            view.items = items;
            view.advance(PanelEvent::Succeeded);
        }
        Err(err) if err.is_soft() => {
            view.notices.push(panel.soft_notice(&err));
            if let MapError::Unsupported { remaining, .. } = err {
                view.items = remaining;
            }
            view.advance(PanelEvent::Succeeded);
        }
        Err(err) => {
            warn!(panel = P::KIND.slug(), error = %err, "Panel payload could not be mapped");
            view.fail(P::FAILURE_MESSAGE);
        }
    }

    view
}
