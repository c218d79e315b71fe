//! Short URL deactivation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Service for deactivating short URLs.
///
/// Deactivation is a one-way transition: there is no reactivation, and a
/// second attempt on an already-inactive record is a caller error rather
/// than a silent success.
pub struct DeactivationService {
    short_urls: Arc<dyn ShortUrlRepository>,
}

impl DeactivationService {
    /// Creates a new deactivation service.
    pub fn new(short_urls: Arc<dyn ShortUrlRepository>) -> Self {
        Self { short_urls }
    }

    /// Deactivates the short URL holding `short_key`.
    ///
    /// Click history and `expires_at` are untouched. The flip itself is an
    /// atomic compare-and-set in the store, so two concurrent deactivations
    /// cannot both report success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record holds the key, and
    /// [`AppError::AlreadyDeactivated`] if the record is already inactive,
    /// including when a concurrent call won the flip.
    pub async fn deactivate(&self, short_key: &str) -> Result<ShortUrl, AppError> {
        let url = self
            .short_urls
            .find_by_key(short_key)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_key": short_key }))
            })?;

        if !url.is_active {
            return Err(AppError::already_deactivated(
                "URL already deactivated",
                json!({ "short_key": short_key }),
            ));
        }

        self.short_urls
            .set_active(url.id, false)
            .await?
            .ok_or_else(|| {
                AppError::already_deactivated(
                    "URL already deactivated",
                    json!({ "short_key": short_key }),
                )
            })
    }
}
