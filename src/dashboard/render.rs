//! HTML page renderer
//!
//! One full page per request: sidebar menu, the active panel's controls, its
//! notices and display items, and the about section. Upstream text is escaped
//! by maud; upstream URLs are only emitted when they are http(s).

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::context::{PanelKind, RenderContext, Rover, SOL_MAX, SOL_MIN};
use super::controller::PanelView;
use super::display::{DisplayItem, Notice};
use super::panels::{MAP_CENTER, MAP_ZOOM};

pub const PAGE_TITLE: &str = "🚀 NASA Space Explorer";

const INTRO: &str = "Explore the cosmos through NASA APIs — APOD, Mars rover photos, news, and location-based tools.";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; display: flex; min-height: 100vh; color: #262730; }
.sidebar { width: 16rem; padding: 2rem 1rem; background: #f0f2f6; }
.sidebar select { width: 100%; }
.content { flex: 1; max-width: 46rem; margin: 0 auto; padding: 2rem 1rem; }
figure { margin: 1rem 0; }
figure img, video, iframe { width: 100%; }
iframe { aspect-ratio: 16 / 9; border: 0; }
figcaption { color: #6b6f7b; font-size: 0.9rem; text-align: center; }
.notice { padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 1rem 0; }
.notice-info { background: #e8f0fe; }
.notice-success { background: #e6f4ea; }
.notice-warning { background: #fef7e0; }
.notice-error { background: #fce8e6; }
#map { height: 500px; }
form label { display: block; margin-top: 0.75rem; }
"#;

const MAP_SCRIPT: &str = r#"
(function () {
  var el = document.getElementById('map');
  var map = L.map(el).setView([parseFloat(el.dataset.lat), parseFloat(el.dataset.lng)], parseInt(el.dataset.zoom, 10));
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);
  if (el.dataset.clickLat && el.dataset.clickLng) {
    L.marker([parseFloat(el.dataset.clickLat), parseFloat(el.dataset.clickLng)]).addTo(map);
  }
  map.on('click', function (e) {
    var params = new URLSearchParams({ panel: 'map', lat: e.latlng.lat, lng: e.latlng.lng });
    window.location.search = params.toString();
  });
})();
"#;

/// Render the whole page for one request.
pub fn page(ctx: &RenderContext, view: &PanelView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                style { (PreEscaped(STYLE)) }
                @if ctx.panel == PanelKind::Map {
                    link rel="stylesheet" href=(LEAFLET_CSS);
                    script src=(LEAFLET_JS) {}
                }
            }
            body {
                aside.sidebar { (menu(ctx.panel)) }
                main.content {
                    h1 { (PAGE_TITLE) }
                    p { (INTRO) }
                    h2 { (view.kind.heading()) }
                    (controls(ctx))
                    (notices(&view.notices))
                    (items(&view.items))
                    (about())
                }
            }
        }
    }
}

fn menu(selected: PanelKind) -> Markup {
    html! {
        form method="get" action="/" {
            label for="panel" { "🔭 Choose a Feature" }
            select #panel name="panel" onchange="this.form.submit()" {
                @for kind in PanelKind::ALL {
                    option value=(kind.slug()) selected[kind == selected] { (kind.label()) }
                }
            }
            noscript { button type="submit" { "Open" } }
        }
    }
}

fn controls(ctx: &RenderContext) -> Markup {
    match ctx.panel {
        PanelKind::Apod => html! {
            p { "Pick a date to view the NASA Astronomy Picture of the Day:" }
            form method="get" action="/" {
                input type="hidden" name="panel" value=(PanelKind::Apod.slug());
                label for="date" { "Select a date" }
                input #date type="date" name="date"
                    value=(ctx.apod_date.format("%Y-%m-%d").to_string())
                    onchange="this.form.submit()";
                noscript { button type="submit" { "Show" } }
            }
        },
        PanelKind::RoverPhotos => html! {
            p { "Choose a rover and Martian Sol (a solar day on Mars) to see real photos:" }
            form method="get" action="/" {
                input type="hidden" name="panel" value=(PanelKind::RoverPhotos.slug());
                label for="rover" { "🔧 Choose Rover" }
                select #rover name="rover" {
                    @for rover in Rover::ALL {
                        option value=(rover.name()) selected[rover == ctx.rover] { (rover.name()) }
                    }
                }
                label for="sol" { "🔢 Enter Martian Sol" }
                input #sol type="number" name="sol" min=(SOL_MIN) max=(SOL_MAX) step="1" value=(ctx.sol);
                p { button type="submit" name="fetch" value="1" { "Get Mars Photos" } }
            }
        },
        PanelKind::News => html! {
            form method="get" action="/" {
                input type="hidden" name="panel" value=(PanelKind::News.slug());
                button type="submit" name="fetch" value="1" { "Load Today's Space News" }
            }
        },
        PanelKind::Map => html! {
            p { "Click on the map to get latitude and longitude for any place on Earth." }
            div #map
                data-lat=(MAP_CENTER.0)
                data-lng=(MAP_CENTER.1)
                data-zoom=(MAP_ZOOM)
                data-click-lat=[ctx.last_click.map(|c| c.lat)]
                data-click-lng=[ctx.last_click.map(|c| c.lng)] {}
            script { (PreEscaped(MAP_SCRIPT)) }
        },
    }
}

fn notices(notices: &[Notice]) -> Markup {
    html! {
        @for notice in notices {
            div class=(notice.level.css_class()) role="status" { (notice.message) }
        }
    }
}

fn items(items: &[DisplayItem]) -> Markup {
    let first_link = items
        .iter()
        .position(|item| matches!(item, DisplayItem::Link { .. }));

    html! {
        @for (index, item) in items.iter().enumerate() {
            @match item {
                DisplayItem::Image { url, caption } => {
                    @if let Some(src) = safe_url(url) {
                        figure {
                            img src=(src) alt=(caption.as_deref().unwrap_or("")) loading="lazy";
                            @if let Some(caption) = caption {
                                figcaption { (caption) }
                            }
                        }
                    }
                }
                DisplayItem::Video { url } => {
                    @if let Some(src) = safe_url(url) {
                        @if is_direct_media(src) {
                            video src=(src) controls {}
                        } @else {
                            iframe src=(src) allowfullscreen {}
                        }
                    }
                }
                DisplayItem::Text(text) => {
                    p { (text) }
                }
                DisplayItem::Link { title, url } => {
                    @if first_link.is_some_and(|first| first < index) {
                        hr;
                    }
                    h3 {
                        @if let Some(href) = safe_url(url) {
                            a href=(href) target="_blank" rel="noopener noreferrer" { (title) }
                        } @else {
                            (title)
                        }
                    }
                }
            }
        }
    }
}

fn about() -> Markup {
    html! {
        details {
            summary { "ℹ️ About This App" }
            p {
                strong { "NASA Space Explorer" }
                " is a simple app powered by public APIs from NASA and Spaceflight News."
            }
            p { "Features:" }
            ul {
                li { "Astronomy Picture of the Day (APOD)" }
                li { "Mars Rover Photos" }
                li { "Real-time Space News Feed" }
                li { "Interactive Earth Map Tool" }
            }
            p { "Built with ❤️ using Rust and curiosity." }
        }
    }
}

/// Only http(s) URLs make it into `src`/`href` attributes.
fn safe_url(url: &str) -> Option<&str> {
    let lower = url.trim_start().to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://")).then_some(url.trim_start())
}

/// Whether a video URL points at a media file rather than an embeddable page.
fn is_direct_media(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
    [".mp4", ".webm", ".ogg", ".mov"]
        .iter()
        .any(|ext| path.ends_with(ext))
}
