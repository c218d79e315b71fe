//! Response DTOs for click statistics.

use serde::Serialize;

use crate::domain::repositories::UrlStats;

/// Windowed click counts for one short URL.
#[derive(Debug, Serialize)]
pub struct UrlStatsResponse {
    pub short_key: String,
    pub original_url: String,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub all_time_clicks: i64,
}

impl From<UrlStats> for UrlStatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            short_key: stats.short_key,
            original_url: stats.original_url,
            last_hour_clicks: stats.last_hour_clicks,
            last_day_clicks: stats.last_day_clicks,
            all_time_clicks: stats.all_time_clicks,
        }
    }
}
