//! Response DTOs for short URL records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::ShortUrl;

/// A short URL record as returned by the API.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub id: i64,
    pub original_url: String,
    pub short_key: String,
    /// Full public URL serving the redirect.
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
}

impl ShortUrlResponse {
    /// Builds the response for an entity, rendering the full short URL
    /// against the service's public base.
    pub fn from_entity(url: ShortUrl, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), url.short_key);
        Self {
            id: url.id,
            original_url: url.original_url,
            short_key: url.short_key,
            short_url,
            created_at: url.created_at,
            expires_at: url.expires_at,
            is_active: url.is_active,
        }
    }
}

/// Paginated listing of short URL records.
#[derive(Debug, Serialize)]
pub struct ShortUrlListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<ShortUrlResponse>,
}
