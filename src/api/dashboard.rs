//! Dashboard page endpoint
//!
//! GET /?panel=..&date=..&rover=..&sol=..&fetch=..&lat=..&lng=..
//!
//! Each request is one interaction: the query string becomes a fresh
//! [RenderContext], the shell runs the selected panel, and the page is
//! rendered. Panel failures are part of the page, so this always answers 200.

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use chrono::{Local, Utc};
use tracing::debug;

use crate::app::AppState;
use crate::dashboard::{DashboardParams, RenderContext, render};

async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Html<String> {
    let ctx = RenderContext::from_params(
        &params,
        Local::now().date_naive(),
        Utc::now().date_naive(),
    );
    debug!(panel = ctx.panel.slug(), fetch = ctx.fetch_requested, "Dashboard interaction");

    let view = state.shell.render(&ctx).await;
    Html(render::page(&ctx, &view).into_string())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}
