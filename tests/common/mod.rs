#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::mpsc;
use url_alias::api::routes::app_router;
use url_alias::domain::click_event::ClickEvent;
use url_alias::domain::entities::{NewClick, NewShortUrl, ShortUrl};
use url_alias::domain::repositories::{ShortUrlRepository, StatsRepository};
use url_alias::infrastructure::persistence::MemoryStore;
use url_alias::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

/// Everything a handler test needs: the server, direct store access for
/// seeding, and the receiving end of the click channel.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

pub fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let (click_tx, click_rx) = mpsc::channel(100);

    let state = AppState::new(
        store.clone(),
        store.clone(),
        click_tx,
        BASE_URL.to_string(),
    );

    let server = TestServer::new(app_router(state)).unwrap();

    TestApp {
        server,
        store,
        click_rx,
    }
}

pub async fn create_test_url(store: &MemoryStore, key: &str, url: &str) -> ShortUrl {
    store
        .insert(NewShortUrl {
            original_url: url.to_string(),
            short_key: key.to_string(),
            expires_at: Utc::now() + Duration::days(1),
        })
        .await
        .unwrap()
}

pub async fn create_expired_url(store: &MemoryStore, key: &str, url: &str) -> ShortUrl {
    store
        .insert(NewShortUrl {
            original_url: url.to_string(),
            short_key: key.to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        })
        .await
        .unwrap()
}

pub async fn create_inactive_url(store: &MemoryStore, key: &str, url: &str) -> ShortUrl {
    let created = create_test_url(store, key, url).await;
    store
        .set_active(created.id, false)
        .await
        .unwrap()
        .expect("freshly created url should deactivate")
}

pub async fn create_test_click(store: &MemoryStore, short_url_id: i64, clicked_at: DateTime<Utc>) {
    store
        .record_click(NewClick {
            short_url_id,
            clicked_at,
        })
        .await
        .unwrap();
}
