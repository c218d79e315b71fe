//! ShortUrl entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its lifecycle state.
///
/// Maps a unique short key to the original URL. The key, original URL, and
/// timestamps are immutable after creation; `is_active` is the only mutable
/// field and only ever transitions from `true` to `false`.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_key: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_key: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            original_url,
            short_key,
            created_at,
            expires_at,
            is_active,
        }
    }

    /// Returns true if `now` is at or past the expiry time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true if the URL may serve a redirect: active and unexpired.
    pub fn is_resolvable(&self, now: DateTime<Utc>) -> bool {
        self.is_active && !self.is_expired(now)
    }
}

/// Input data for persisting a new short URL.
///
/// `id` and `created_at` are assigned by the store; `is_active` always starts
/// as `true`.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_key: String,
    pub expires_at: DateTime<Utc>,
}
