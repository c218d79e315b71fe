//! Repository trait for click recording and statistics.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Aggregated click counts for a single short URL.
///
/// Rolling windows end at the `now` passed to the query: the last hour is
/// `(now-1h, now]`, the last day `(now-24h, now]`, and `all_time_clicks` is
/// unbounded.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub short_url_id: i64,
    pub short_key: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub all_time_clicks: i64,
}

/// Repository interface for click tracking and live-computed statistics.
///
/// Counts are always computed from the click records at query time; there is
/// no denormalized counter to drift out of sync.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends one click record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the referenced short URL does not
    /// exist. Returns [`AppError::Unavailable`] / [`AppError::Internal`] on
    /// store errors.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Computes windowed click counts for one key, in any active/expiry state.
    ///
    /// Returns `Ok(None)` if no record holds the key.
    async fn stats_by_key(
        &self,
        short_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UrlStats>, AppError>;

    /// Computes windowed click counts for every short URL.
    ///
    /// Ordered by all-time clicks descending; ties broken by most recent
    /// creation first.
    async fn list_stats(&self, now: DateTime<Utc>) -> Result<Vec<UrlStats>, AppError>;
}
