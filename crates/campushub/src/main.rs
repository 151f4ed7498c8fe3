use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use campushub::server;
use campushub::types::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();
    info!(
        backend_url = %config.backend_url,
        bind_addr = %config.bind_addr,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "Starting campushub"
    );

    let state = Arc::new(AppState::new(config.clone()).context("failed to build app state")?);
    let router = server::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
