//! HTTP server initialization and runtime setup.
//!
//! Handles storage connection, worker spawning, and the Axum server
//! lifecycle.

use anyhow::Result;
use axum::extract::Request;
use axum::ServiceExt;
use std::net::SocketAddr;
use tokio::sync::mpsc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::api::routes::app_router;
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::persistence;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool + migrations, or in-memory)
/// - Background click worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the storage connection, the bind, or the server
/// runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let repositories = persistence::connect(&config).await?;

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, repositories.stats.clone()));
    tracing::info!("Click worker started");

    let state = AppState::new(
        repositories.short_urls,
        repositories.stats,
        click_tx,
        config.base_url.clone(),
    );

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
