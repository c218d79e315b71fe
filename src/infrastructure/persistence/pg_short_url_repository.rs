//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

const SHORT_URL_COLUMNS: &str = "id, original_url, short_key, created_at, expires_at, is_active";

/// PostgreSQL repository for short URL storage.
///
/// Uniqueness of `short_key` is enforced by the table's unique constraint;
/// a losing concurrent insert surfaces as a conflict via the driver error
/// translation in [`crate::error::map_sqlx_error`]. The active flip is a
/// single conditional `UPDATE ... RETURNING`, so no read-modify-write race
/// exists at this layer.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

pub(crate) fn map_short_url_row(row: &PgRow) -> Result<ShortUrl, sqlx::Error> {
    Ok(ShortUrl::new(
        row.try_get("id")?,
        row.try_get("original_url")?,
        row.try_get("short_key")?,
        row.try_get("created_at")?,
        row.try_get("expires_at")?,
        row.try_get("is_active")?,
    ))
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO short_urls (original_url, short_key, expires_at)
            VALUES ($1, $2, $3)
            RETURNING {SHORT_URL_COLUMNS}
            "#
        ))
        .bind(&new_url.original_url)
        .bind(&new_url.short_key)
        .bind(new_url.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(map_short_url_row(&row)?)
    }

    async fn find_by_key(&self, short_key: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {SHORT_URL_COLUMNS} FROM short_urls WHERE short_key = $1"
        ))
        .bind(short_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_short_url_row).transpose().map_err(Into::into)
    }

    async fn find_resolvable(
        &self,
        short_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {SHORT_URL_COLUMNS}
            FROM short_urls
            WHERE short_key = $1 AND is_active = TRUE AND expires_at > $2
            "#
        ))
        .bind(short_key)
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_short_url_row).transpose().map_err(Into::into)
    }

    async fn exists_by_key(&self, short_key: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM short_urls WHERE short_key = $1)")
                .bind(short_key)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE short_urls
            SET is_active = $2
            WHERE id = $1 AND is_active <> $2
            RETURNING {SHORT_URL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_short_url_row).transpose().map_err(Into::into)
    }

    async fn list(
        &self,
        active: Option<bool>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {SHORT_URL_COLUMNS}
            FROM short_urls
            WHERE ($1::boolean IS NULL OR is_active = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(active)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(map_short_url_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    async fn count(&self, active: Option<bool>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM short_urls WHERE ($1::boolean IS NULL OR is_active = $1)",
        )
        .bind(active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
