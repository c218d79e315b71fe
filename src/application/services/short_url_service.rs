//! Short URL creation and retrieval service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::application::services::KeyGenerator;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::key_gen::validate_custom_key;
use crate::utils::url_check::validate_original_url;

/// Expiry window applied when the caller does not pass one.
pub const DEFAULT_EXPIRES_DAYS: i64 = 1;
/// Smallest accepted expiry window, in days.
pub const MIN_EXPIRES_DAYS: i64 = 1;
/// Largest accepted expiry window, in days.
pub const MAX_EXPIRES_DAYS: i64 = 365;

/// Service for creating and retrieving short URLs.
///
/// Validates input, allocates or validates a short key, and persists new
/// records through the store's atomic insert. Key assignment is an explicit
/// step here, never a side effect of persistence.
pub struct ShortUrlService {
    short_urls: Arc<dyn ShortUrlRepository>,
    key_generator: KeyGenerator,
}

impl ShortUrlService {
    /// Creates a new short URL service.
    pub fn new(short_urls: Arc<dyn ShortUrlRepository>) -> Self {
        let key_generator = KeyGenerator::new(short_urls.clone());
        Self {
            short_urls,
            key_generator,
        }
    }

    /// Creates a short URL.
    ///
    /// # Arguments
    ///
    /// - `original_url` - absolute http(s) URL, at most 2048 characters
    /// - `custom_key` - optional caller-chosen key; must match the generated
    ///   key alphabet and length. Empty strings are treated as absent.
    /// - `expires_days` - optional expiry window, 1..=365, default 1
    ///
    /// # Key assignment
    ///
    /// A custom key is format-validated first, then pre-checked for existence
    /// so an obvious duplicate fails fast. Either way the storage-layer
    /// uniqueness constraint has the final word at insert time, so concurrent
    /// creations of the same key cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a bad URL, key format, or expiry
    /// window; [`AppError::Conflict`] if the key is taken (pre-check or insert
    /// race); [`AppError::KeyGenerationExhausted`] if generation ran out of
    /// attempts.
    pub async fn create_short_url(
        &self,
        original_url: String,
        custom_key: Option<String>,
        expires_days: Option<i64>,
    ) -> Result<ShortUrl, AppError> {
        validate_original_url(&original_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({})))?;

        let expires_days = expires_days.unwrap_or(DEFAULT_EXPIRES_DAYS);
        if !(MIN_EXPIRES_DAYS..=MAX_EXPIRES_DAYS).contains(&expires_days) {
            return Err(AppError::bad_request(
                format!(
                    "Expiry must be between {} and {} days",
                    MIN_EXPIRES_DAYS, MAX_EXPIRES_DAYS
                ),
                json!({ "expires_days": expires_days }),
            ));
        }

        let short_key = match custom_key.filter(|k| !k.is_empty()) {
            Some(custom) => {
                validate_custom_key(&custom)?;

                if self.short_urls.exists_by_key(&custom).await? {
                    return Err(AppError::conflict(
                        "Custom key already exists",
                        json!({ "short_key": custom }),
                    ));
                }

                custom
            }
            None => self.key_generator.generate().await?,
        };

        let new_url = NewShortUrl {
            original_url,
            short_key,
            expires_at: Utc::now() + Duration::days(expires_days),
        };

        self.short_urls.insert(new_url).await
    }

    /// Retrieves a short URL by key, regardless of active or expiry state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record holds the key.
    pub async fn get_by_key(&self, short_key: &str) -> Result<ShortUrl, AppError> {
        self.short_urls
            .find_by_key(short_key)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_key": short_key }))
            })
    }

    /// Lists short URLs with an explicit active filter and pagination.
    ///
    /// Returns the page of records and the total count under the same filter.
    pub async fn list(
        &self,
        active: Option<bool>,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ShortUrl>, i64), AppError> {
        let items = self.short_urls.list(active, offset, limit).await?;
        let total = self.short_urls.count(active).await?;
        Ok((items, total))
    }

    /// Counts short URLs under an explicit active filter.
    pub async fn count(&self, active: Option<bool>) -> Result<i64, AppError> {
        self.short_urls.count(active).await
    }
}
