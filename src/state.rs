//! Shared application state handed to HTTP handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{
    DeactivationService, RedirectResolver, ShortUrlService, StatsAggregator,
};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::{ShortUrlRepository, StatsRepository};

/// Handles to the application services plus the click channel.
///
/// Cloned per request by axum; everything inside is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub short_urls: Arc<ShortUrlService>,
    pub redirects: Arc<RedirectResolver>,
    pub deactivation: Arc<DeactivationService>,
    pub stats: Arc<StatsAggregator>,
    /// Sender half of the click pipeline, kept for health reporting.
    pub click_tx: mpsc::Sender<ClickEvent>,
    /// Public base URL prefixed to short keys in API responses.
    pub base_url: String,
}

impl AppState {
    /// Wires the services onto the given repositories.
    pub fn new(
        short_url_repository: Arc<dyn ShortUrlRepository>,
        stats_repository: Arc<dyn StatsRepository>,
        click_tx: mpsc::Sender<ClickEvent>,
        base_url: String,
    ) -> Self {
        Self {
            short_urls: Arc::new(ShortUrlService::new(short_url_repository.clone())),
            redirects: Arc::new(RedirectResolver::new(
                short_url_repository.clone(),
                click_tx.clone(),
            )),
            deactivation: Arc::new(DeactivationService::new(short_url_repository)),
            stats: Arc::new(StatsAggregator::new(stats_repository)),
            click_tx,
            base_url,
        }
    }
}
