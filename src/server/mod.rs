//! HTTP API for running redirect checks.
//!
//! Provides two endpoints:
//! - `POST /api/check-redirects` - Runs the check catalog against a site
//! - `GET /health` - Liveness probe
//!
//! Each request gets its own run; nothing is shared between requests except
//! the HTTP client.

mod handlers;
mod types;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
pub use handlers::{check_redirects_handler, health_handler, ApiError};
pub use types::{AppState, CheckRequest, CheckResponse, ErrorResponse, HealthResponse};

/// Builds the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/check-redirects", post(check_redirects_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Binds `server.bind-address` and serves the API until the process exits
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config).context("Failed to build HTTP client")?;
    let app = router(state);

    let address = &config.server.bind_address;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind API server to {}", address))?;

    tracing::info!("API server listening on http://{}/", address);
    tracing::info!("  - Checks: POST http://{}/api/check-redirects", address);
    tracing::info!("  - Health: GET http://{}/health", address);

    axum::serve(listener, app)
        .await
        .context("API server error")?;

    Ok(())
}
