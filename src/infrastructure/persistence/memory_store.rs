//! In-memory storage backend.
//!
//! Backs tests and zero-dependency deployments. A single mutex guards all
//! state, which makes every check-then-write sequence atomic from the
//! caller's point of view, mirroring the uniqueness constraint and
//! conditional updates the PostgreSQL backend gets from the database.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{Click, NewClick, NewShortUrl, ShortUrl};
use crate::domain::repositories::{ShortUrlRepository, StatsRepository, UrlStats};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    short_urls: HashMap<i64, ShortUrl>,
    clicks: Vec<Click>,
    next_short_url_id: i64,
    next_click_id: i64,
}

impl Inner {
    fn find_by_key(&self, short_key: &str) -> Option<&ShortUrl> {
        self.short_urls.values().find(|u| u.short_key == short_key)
    }

    fn stats_for(&self, url: &ShortUrl, now: DateTime<Utc>) -> UrlStats {
        let hour_ago = now - Duration::hours(1);
        let day_ago = now - Duration::hours(24);

        let mut last_hour_clicks = 0;
        let mut last_day_clicks = 0;
        let mut all_time_clicks = 0;

        for click in self.clicks.iter().filter(|c| c.short_url_id == url.id) {
            all_time_clicks += 1;
            if click.clicked_at > day_ago {
                last_day_clicks += 1;
            }
            if click.clicked_at > hour_ago {
                last_hour_clicks += 1;
            }
        }

        UrlStats {
            short_url_id: url.id,
            short_key: url.short_key.clone(),
            original_url: url.original_url.clone(),
            created_at: url.created_at,
            last_hour_clicks,
            last_day_clicks,
            all_time_clicks,
        }
    }
}

/// In-memory implementation of both store contracts.
///
/// One instance serves as [`ShortUrlRepository`] and [`StatsRepository`] at
/// the same time, the same way one database backs both PostgreSQL
/// repositories.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-mutation; state is unrecoverable.
        self.inner.lock().expect("memory store lock poisoned")
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryStore {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut inner = self.lock();

        if inner.find_by_key(&new_url.short_key).is_some() {
            return Err(AppError::conflict(
                "Short key already exists",
                json!({ "short_key": new_url.short_key }),
            ));
        }

        inner.next_short_url_id += 1;
        let url = ShortUrl::new(
            inner.next_short_url_id,
            new_url.original_url,
            new_url.short_key,
            Utc::now(),
            new_url.expires_at,
            true,
        );
        inner.short_urls.insert(url.id, url.clone());

        Ok(url)
    }

    async fn find_by_key(&self, short_key: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.lock().find_by_key(short_key).cloned())
    }

    async fn find_resolvable(
        &self,
        short_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        Ok(self
            .lock()
            .find_by_key(short_key)
            .filter(|u| u.is_resolvable(now))
            .cloned())
    }

    async fn exists_by_key(&self, short_key: &str) -> Result<bool, AppError> {
        Ok(self.lock().find_by_key(short_key).is_some())
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<Option<ShortUrl>, AppError> {
        let mut inner = self.lock();

        match inner.short_urls.get_mut(&id) {
            Some(url) if url.is_active != active => {
                url.is_active = active;
                Ok(Some(url.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn list(
        &self,
        active: Option<bool>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ShortUrl>, AppError> {
        let inner = self.lock();

        let mut urls: Vec<ShortUrl> = inner
            .short_urls
            .values()
            .filter(|u| active.is_none_or(|a| u.is_active == a))
            .cloned()
            .collect();
        urls.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(urls
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, active: Option<bool>) -> Result<i64, AppError> {
        let inner = self.lock();

        Ok(inner
            .short_urls
            .values()
            .filter(|u| active.is_none_or(|a| u.is_active == a))
            .count() as i64)
    }
}

#[async_trait]
impl StatsRepository for MemoryStore {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut inner = self.lock();

        if !inner.short_urls.contains_key(&new_click.short_url_id) {
            return Err(AppError::bad_request(
                "Referenced short URL does not exist",
                json!({ "short_url_id": new_click.short_url_id }),
            ));
        }

        inner.next_click_id += 1;
        let click = Click::new(
            inner.next_click_id,
            new_click.short_url_id,
            new_click.clicked_at,
        );
        inner.clicks.push(click.clone());

        Ok(click)
    }

    async fn stats_by_key(
        &self,
        short_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UrlStats>, AppError> {
        let inner = self.lock();

        Ok(inner
            .find_by_key(short_key)
            .map(|url| inner.stats_for(url, now)))
    }

    async fn list_stats(&self, now: DateTime<Utc>) -> Result<Vec<UrlStats>, AppError> {
        let inner = self.lock();

        let mut stats: Vec<UrlStats> = inner
            .short_urls
            .values()
            .map(|url| inner.stats_for(url, now))
            .collect();
        stats.sort_by(|a, b| {
            b.all_time_clicks
                .cmp(&a.all_time_clicks)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.short_url_id.cmp(&a.short_url_id))
        });

        Ok(stats)
    }
}
