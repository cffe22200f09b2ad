//! NASA Space Explorer - dashboard server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use space_explorer::app::{AppState, build_app};
use space_explorer::config::Config;
use space_explorer::services::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log format is known before tracing starts
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    init_tracing(config.log_format)?;

    tracing::info!("Starting NASA Space Explorer");
    tracing::debug!(config = ?config, "Configuration loaded");
    if config.nasa_api_key == space_explorer::config::DEMO_API_KEY {
        tracing::warn!("NASA_API_KEY not set; using the rate-limited demo key");
    }

    let app = build_app(AppState::new(config.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "Dashboard: http://{}:{}/",
        config.host.as_deref().unwrap_or("localhost"),
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("axum::serve")?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
