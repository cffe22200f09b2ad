//! NASA Space Explorer
//!
//! A single-page dashboard over four panels: Astronomy Picture of the Day,
//! Mars rover photos, today's space news and a click-to-coordinate map.
//! Every browser interaction is one GET that fetches from at most one
//! upstream API and renders the result as HTML.

pub mod api;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod mappers;
pub mod services;
