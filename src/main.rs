// Main entry point - Data loading and server setup
use std::{net::SocketAddr, sync::Arc};

use aqi_dashboard::application::data_source::load_first_available;
use aqi_dashboard::application::query_service::QueryService;
use aqi_dashboard::infrastructure::config::load_app_config;
use aqi_dashboard::presentation::app_state::AppState;
use aqi_dashboard::presentation::router;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Load observations, primary source first
    let sources = config.data_sources();
    let store = load_first_available(&sources, config.store.duplicate_policy())
        .await
        .context("No observation data available")?;

    // Create services (application layer)
    let query_service = QueryService::new(Arc::new(store), config.catalog.clone());
    let state = Arc::new(AppState { query_service });

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting aqi-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
