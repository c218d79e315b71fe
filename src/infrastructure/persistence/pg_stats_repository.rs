//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{StatsRepository, UrlStats};
use crate::error::AppError;

/// PostgreSQL repository for click recording and windowed aggregation.
///
/// Counts are computed live with filtered aggregates over the `clicks`
/// table; the `(short_url_id, clicked_at DESC)` index keeps the window scans
/// cheap.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_stats_row(row: &PgRow) -> Result<UrlStats, sqlx::Error> {
    Ok(UrlStats {
        short_url_id: row.try_get("id")?,
        short_key: row.try_get("short_key")?,
        original_url: row.try_get("original_url")?,
        created_at: row.try_get("created_at")?,
        last_hour_clicks: row.try_get("last_hour_clicks")?,
        last_day_clicks: row.try_get("last_day_clicks")?,
        all_time_clicks: row.try_get("all_time_clicks")?,
    })
}

const STATS_SELECT: &str = r#"
    SELECT
        u.id,
        u.short_key,
        u.original_url,
        u.created_at,
        COUNT(c.id) FILTER (WHERE c.clicked_at > $1) AS last_hour_clicks,
        COUNT(c.id) FILTER (WHERE c.clicked_at > $2) AS last_day_clicks,
        COUNT(c.id) AS all_time_clicks
    FROM short_urls u
    LEFT JOIN clicks c ON c.short_url_id = u.id
"#;

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO clicks (short_url_id, clicked_at)
            VALUES ($1, $2)
            RETURNING id, short_url_id, clicked_at
            "#,
        )
        .bind(new_click.short_url_id)
        .bind(new_click.clicked_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Click::new(
            row.try_get("id").map_err(AppError::from)?,
            row.try_get("short_url_id").map_err(AppError::from)?,
            row.try_get("clicked_at").map_err(AppError::from)?,
        ))
    }

    async fn stats_by_key(
        &self,
        short_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UrlStats>, AppError> {
        let row = sqlx::query(&format!(
            r#"
            {STATS_SELECT}
            WHERE u.short_key = $3
            GROUP BY u.id, u.short_key, u.original_url, u.created_at
            "#
        ))
        .bind(now - Duration::hours(1))
        .bind(now - Duration::hours(24))
        .bind(short_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_stats_row).transpose().map_err(Into::into)
    }

    async fn list_stats(&self, now: DateTime<Utc>) -> Result<Vec<UrlStats>, AppError> {
        let rows = sqlx::query(&format!(
            r#"
            {STATS_SELECT}
            GROUP BY u.id, u.short_key, u.original_url, u.created_at
            ORDER BY all_time_clicks DESC, u.created_at DESC
            "#
        ))
        .bind(now - Duration::hours(1))
        .bind(now - Duration::hours(24))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(map_stats_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}
