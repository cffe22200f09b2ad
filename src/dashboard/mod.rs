//! Dashboard domain: render context, display items, panels and the shell

pub mod context;
pub mod controller;
pub mod display;
mod panels;
pub mod render;
pub mod shell;

pub use context::{DashboardParams, LatLng, PanelKind, RenderContext, Rover};
pub use controller::{PanelPhase, PanelView};
pub use display::{DisplayItem, Notice, NoticeLevel};
pub use shell::Shell;
