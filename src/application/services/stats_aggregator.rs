//! Click statistics aggregation service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::repositories::{StatsRepository, UrlStats};
use crate::error::AppError;

/// Service computing rolling-window click statistics.
///
/// Counts cover the last hour, the last 24 hours, and all time, each window
/// ending at the moment of the query. Statistics are visible for every
/// record regardless of active or expiry state.
pub struct StatsAggregator {
    stats: Arc<dyn StatsRepository>,
}

impl StatsAggregator {
    /// Creates a new stats aggregator.
    pub fn new(stats: Arc<dyn StatsRepository>) -> Self {
        Self { stats }
    }

    /// Computes click statistics for one short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record holds the key.
    pub async fn stats_for_key(&self, short_key: &str) -> Result<UrlStats, AppError> {
        self.stats
            .stats_by_key(short_key, Utc::now())
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_key": short_key }))
            })
    }

    /// Computes click statistics for every short URL.
    ///
    /// Ordered by all-time clicks descending, ties broken by most recent
    /// creation first.
    pub async fn list_stats(&self) -> Result<Vec<UrlStats>, AppError> {
        self.stats.list_stats(Utc::now()).await
    }
}
