//! Road Risk Relay Server

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roadrisk_relay::{config::Config, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "roadrisk_relay=debug,tower_http=debug".into()))
        .with((!config.json_logs).then(|| tracing_subscriber::fmt::layer()))
        .with(config.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .init();

    tracing::info!("Road Risk Relay starting...");
    tracing::info!("Upstream: {}", config.relay().predict_url());

    match config.relay().timeout {
        Some(timeout) => tracing::info!("Upstream timeout: {}s", timeout.as_secs()),
        None => tracing::warn!("Upstream timeout disabled, a hung backend blocks its caller"),
    }

    if config.is_production() && !config.validate_requests {
        tracing::warn!("Request validation disabled in production");
    }

    let state = AppState::new(config.clone()).context("Failed to create prediction relay")?;
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
