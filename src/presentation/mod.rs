// Presentation layer - HTTP JSON API consumed by the chart frontend
pub mod app_state;
pub mod error;
pub mod extract;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{catalog, compare_years, health_check, snapshot, trajectory};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/catalog", get(catalog))
        .route("/snapshot", get(snapshot))
        .route("/trajectory", get(trajectory))
        .route("/compare", get(compare_years))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
