//! End-to-end test of the redirect → click worker → stats pipeline.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use serde_json::Value;
use tokio::sync::mpsc;
use url_alias::api::routes::app_router;
use url_alias::domain::click_worker::run_click_worker;
use url_alias::infrastructure::persistence::MemoryStore;
use url_alias::state::AppState;

#[tokio::test]
async fn test_redirect_click_reaches_stats_through_worker() {
    let store = Arc::new(MemoryStore::new());
    let (click_tx, click_rx) = mpsc::channel(100);
    tokio::spawn(run_click_worker(click_rx, store.clone()));

    let state = AppState::new(
        store.clone(),
        store.clone(),
        click_tx,
        common::BASE_URL.to_string(),
    );
    let server = TestServer::new(app_router(state)).unwrap();

    common::create_test_url(&store, "abc123", "https://example.com").await;

    for _ in 0..3 {
        assert_eq!(server.get("/abc123").await.status_code(), 307);
    }

    // The worker drains the queue asynchronously; wait for it to catch up.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let body: Value = server.get("/short-urls/stats/abc123").await.json();
        if body["all_time_clicks"] == 3 {
            assert_eq!(body["last_hour_clicks"], 3);
            break;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "worker never recorded the clicks: {body}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
