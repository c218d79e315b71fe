//! API route configuration.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::api::handlers::{
    create_handler, deactivate_handler, get_handler, health_handler, list_handler,
    redirect_handler, stats_detail_handler, stats_list_handler,
};
use crate::api::middleware;
use crate::state::AppState;

/// Builds the application router.
///
/// # Endpoints
///
/// - `GET    /health`                            - Service health
/// - `POST   /short-urls`                        - Create a short URL
/// - `GET    /short-urls`                        - List short URLs (paginated)
/// - `GET    /short-urls/stats`                  - Click statistics for all URLs
/// - `GET    /short-urls/stats/{short_key}`      - Click statistics for one URL
/// - `GET    /short-urls/{short_key}`            - Retrieve one short URL
/// - `PATCH  /short-urls/{short_key}/deactivate` - Deactivate a short URL
/// - `GET    /{short_key}`                       - Redirect to the original URL
///
/// Short keys are fixed-length alphanumeric, so the root-level redirect
/// route cannot collide with the literal API paths.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/short-urls", post(create_handler).get(list_handler))
        .route("/short-urls/stats", get(stats_list_handler))
        .route("/short-urls/stats/{short_key}", get(stats_detail_handler))
        .route("/short-urls/{short_key}", get(get_handler))
        .route(
            "/short-urls/{short_key}/deactivate",
            patch(deactivate_handler),
        )
        .route("/{short_key}", get(redirect_handler))
        .layer(middleware::tracing::layer())
        .with_state(state)
}
