mod common;

use serde_json::Value;

#[tokio::test]
async fn test_deactivate_success() {
    let app = common::spawn_app();
    common::create_test_url(&app.store, "abc123", "https://example.com").await;

    let response = app.server.patch("/short-urls/abc123/deactivate").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "deactivated");
}

#[tokio::test]
async fn test_deactivate_unknown_key_is_not_found() {
    let app = common::spawn_app();

    let response = app.server.patch("/short-urls/nosuch/deactivate").await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_deactivate_twice_conflicts() {
    let app = common::spawn_app();
    common::create_test_url(&app.store, "abc123", "https://example.com").await;

    let first = app.server.patch("/short-urls/abc123/deactivate").await;
    assert_eq!(first.status_code(), 200);

    let second = app.server.patch("/short-urls/abc123/deactivate").await;
    assert_eq!(second.status_code(), 409);

    let body: Value = second.json();
    assert_eq!(body["error"]["code"], "already_deactivated");
}

#[tokio::test]
async fn test_deactivated_url_never_resolves_again() {
    let app = common::spawn_app();
    common::create_test_url(&app.store, "abc123", "https://example.com").await;

    assert_eq!(app.server.get("/abc123").await.status_code(), 307);

    app.server.patch("/short-urls/abc123/deactivate").await;

    // Gone before expiry, and it stays that way.
    assert_eq!(app.server.get("/abc123").await.status_code(), 410);
    assert_eq!(app.server.get("/abc123").await.status_code(), 410);
}

#[tokio::test]
async fn test_deactivation_preserves_click_history() {
    let app = common::spawn_app();
    let url = common::create_test_url(&app.store, "abc123", "https://example.com").await;
    common::create_test_click(&app.store, url.id, chrono::Utc::now()).await;

    app.server.patch("/short-urls/abc123/deactivate").await;

    let stats = app.server.get("/short-urls/stats/abc123").await;
    assert_eq!(stats.status_code(), 200);
    let body: Value = stats.json();
    assert_eq!(body["all_time_clicks"], 1);
}

#[tokio::test]
async fn test_deactivation_preserves_expiry() {
    let app = common::spawn_app();
    let created = common::create_test_url(&app.store, "abc123", "https://example.com").await;

    app.server.patch("/short-urls/abc123/deactivate").await;

    let response = app.server.get("/short-urls/abc123").await;
    let body: Value = response.json();
    let expires_at: chrono::DateTime<chrono::Utc> =
        body["expires_at"].as_str().unwrap().parse().unwrap();

    assert_eq!(expires_at, created.expires_at);
    assert_eq!(body["is_active"], false);
}
