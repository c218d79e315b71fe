//! Handlers for click statistics.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::stats::UrlStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for every short URL.
///
/// # Endpoint
///
/// `GET /short-urls/stats`
///
/// Ordered by all-time clicks descending, ties broken by most recent
/// creation first.
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlStatsResponse>>, AppError> {
    let stats = state.stats.list_stats().await?;

    Ok(Json(stats.into_iter().map(UrlStatsResponse::from).collect()))
}

/// Returns click statistics for one short URL.
///
/// # Endpoint
///
/// `GET /short-urls/stats/{short_key}`
///
/// Statistics are visible for deactivated and expired records too.
///
/// # Errors
///
/// Returns 404 Not Found if no record holds the key.
pub async fn stats_detail_handler(
    State(state): State<AppState>,
    Path(short_key): Path<String>,
) -> Result<Json<UrlStatsResponse>, AppError> {
    let stats = state.stats.stats_for_key(&short_key).await?;

    Ok(Json(UrlStatsResponse::from(stats)))
}
