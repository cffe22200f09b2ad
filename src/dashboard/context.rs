//! Per-request render context
//!
//! Every browser interaction arrives as a query string. It is parsed once into an
//! immutable [RenderContext] that the shell and panel controllers read from;
//! nothing survives past the request.

use std::num::IntErrorKind;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

pub const SOL_MIN: u32 = 0;
pub const SOL_MAX: u32 = 5000;
pub const SOL_DEFAULT: u32 = 1000;

/// The four fixed menu entries, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelKind {
    #[default]
    Apod,
    RoverPhotos,
    News,
    Map,
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] = [
        PanelKind::Apod,
        PanelKind::RoverPhotos,
        PanelKind::News,
        PanelKind::Map,
    ];

    /// Query-string value
    pub fn slug(self) -> &'static str {
        match self {
            PanelKind::Apod => "apod",
            PanelKind::RoverPhotos => "rover",
            PanelKind::News => "news",
            PanelKind::Map => "map",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            PanelKind::Apod => "Astronomy Picture of the Day",
            PanelKind::RoverPhotos => "Mars Rover Photos",
            PanelKind::News => "Space News Feed",
            PanelKind::Map => "Location Map Tool",
        }
    }

    /// Panel heading
    pub fn heading(self) -> &'static str {
        match self {
            PanelKind::Apod => "🌌 Astronomy Picture of the Day",
            PanelKind::RoverPhotos => "🪐 Mars Rover Photo Explorer",
            PanelKind::News => "📰 Space News Feed",
            PanelKind::Map => "🌍 Location Map Tool",
        }
    }

    /// Accepts either the slug or the menu label, case-insensitively.
    pub fn from_param(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|kind| {
            kind.slug().eq_ignore_ascii_case(value) || kind.label().eq_ignore_ascii_case(value)
        })
    }
}

/// Mars rovers offered in the rover selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rover {
    #[default]
    Curiosity,
    Opportunity,
    Spirit,
}

impl Rover {
    pub const ALL: [Rover; 3] = [Rover::Curiosity, Rover::Opportunity, Rover::Spirit];

    /// Name as it appears in the menu and in the upstream URL path
    pub fn name(self) -> &'static str {
        match self {
            Rover::Curiosity => "Curiosity",
            Rover::Opportunity => "Opportunity",
            Rover::Spirit => "Spirit",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|rover| rover.name().eq_ignore_ascii_case(value))
    }
}

/// A map click position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Clamp a requested sol into the range the rover form allows.
pub fn clamp_sol(requested: i64) -> u32 {
    requested.clamp(SOL_MIN as i64, SOL_MAX as i64) as u32
}

/// Parse the raw sol field. Integers outside the i64 range still clamp to the
/// nearest bound; anything else falls back to the default.
pub fn parse_sol(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) => clamp_sol(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => SOL_MAX,
            IntErrorKind::NegOverflow => SOL_MIN,
            _ => SOL_DEFAULT,
        },
    }
}

/// Raw query-string fields of `GET /`. All are strings so malformed input
/// degrades to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    pub panel: Option<String>,
    pub date: Option<String>,
    pub rover: Option<String>,
    pub sol: Option<String>,
    pub fetch: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// Immutable input for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub panel: PanelKind,
    /// Date picked for APOD (defaults to the server's local today)
    pub apod_date: NaiveDate,
    pub rover: Rover,
    /// Already clamped to [SOL_MIN, SOL_MAX]
    pub sol: u32,
    /// Whether the panel's fetch button was pressed in this interaction
    pub fetch_requested: bool,
    pub last_click: Option<LatLng>,
    /// Current UTC date, used to filter the news feed
    pub today_utc: NaiveDate,
}

impl RenderContext {
    /// Context for a first visit: default panel, default inputs, no actions.
    pub fn initial(today_local: NaiveDate, today_utc: NaiveDate) -> Self {
        Self {
            panel: PanelKind::default(),
            apod_date: today_local,
            rover: Rover::default(),
            sol: SOL_DEFAULT,
            fetch_requested: false,
            last_click: None,
            today_utc,
        }
    }

    pub fn from_params(
        params: &DashboardParams,
        today_local: NaiveDate,
        today_utc: NaiveDate,
    ) -> Self {
        let panel = params
            .panel
            .as_deref()
            .and_then(PanelKind::from_param)
            .unwrap_or_default();

        let apod_date = params
            .date
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    debug!(date = %raw, error = %e, "Ignoring unparseable APOD date");
                    None
                }
            })
            .unwrap_or(today_local);

        let rover = params
            .rover
            .as_deref()
            .and_then(Rover::from_param)
            .unwrap_or_default();

        let sol = params.sol.as_deref().map(parse_sol).unwrap_or(SOL_DEFAULT);

        let last_click = match (parse_coordinate(&params.lat), parse_coordinate(&params.lng)) {
            (Some(lat), Some(lng)) => Some(LatLng { lat, lng }),
            _ => None,
        };

        Self {
            panel,
            apod_date,
            rover,
            sol,
            fetch_requested: params.fetch.is_some(),
            last_click,
            today_utc,
        }
    }
}

fn parse_coordinate(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
