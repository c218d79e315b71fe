//! Redirect resolution service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Resolves short keys to their redirect targets.
///
/// Resolution is tri-state and the order matters: a key that matches an
/// active, unexpired record resolves; a key held by any record at all is
/// gone; anything else never existed. Clients rely on the gone/not-found
/// distinction.
pub struct RedirectResolver {
    short_urls: Arc<dyn ShortUrlRepository>,
    click_tx: mpsc::Sender<ClickEvent>,
}

impl RedirectResolver {
    /// Creates a new resolver emitting click events on `click_tx`.
    pub fn new(short_urls: Arc<dyn ShortUrlRepository>, click_tx: mpsc::Sender<ClickEvent>) -> Self {
        Self {
            short_urls,
            click_tx,
        }
    }

    /// Resolves a short key to its original URL, recording a click.
    ///
    /// The click event is queued fire-and-forget: a full queue drops the
    /// event with a warning and a `clicks_dropped_total` increment, and never
    /// fails the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gone`] if the key exists but is inactive or
    /// expired, [`AppError::NotFound`] if the key never existed.
    pub async fn resolve(&self, short_key: &str) -> Result<String, AppError> {
        let now = Utc::now();

        if let Some(url) = self.short_urls.find_resolvable(short_key, now).await? {
            if self.click_tx.try_send(ClickEvent::new(url.id, now)).is_err() {
                warn!(short_key, "Click queue full or closed, dropping click event");
                metrics::counter!("clicks_dropped_total").increment(1);
            }

            return Ok(url.original_url);
        }

        if self.short_urls.exists_by_key(short_key).await? {
            Err(AppError::gone(
                "URL is inactive or expired",
                json!({ "short_key": short_key }),
            ))
        } else {
            Err(AppError::not_found(
                "URL does not exist",
                json!({ "short_key": short_key }),
            ))
        }
    }
}
