mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn test_create_returns_created_record() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/short-urls")
        .json(&json!({ "original_url": "https://example.com/page" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["original_url"], "https://example.com/page");
    assert_eq!(body["is_active"], true);

    let short_key = body["short_key"].as_str().unwrap();
    assert_eq!(short_key.len(), 6);
    assert!(short_key.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::BASE_URL, short_key)
    );
}

#[tokio::test]
async fn test_create_default_expiry_is_one_day() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/short-urls")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    let body: Value = response.json();
    let created_at: chrono::DateTime<chrono::Utc> =
        body["created_at"].as_str().unwrap().parse().unwrap();
    let expires_at: chrono::DateTime<chrono::Utc> =
        body["expires_at"].as_str().unwrap().parse().unwrap();

    let window = expires_at - created_at;
    assert!(window > chrono::Duration::hours(23));
    assert!(window <= chrono::Duration::hours(24));
}

#[tokio::test]
async fn test_create_with_custom_key() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/short-urls")
        .json(&json!({ "original_url": "https://example.com", "custom_key": "abc123" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["short_key"], "abc123");
}

#[tokio::test]
async fn test_create_duplicate_custom_key_conflicts() {
    let app = common::spawn_app();

    let payload = json!({ "original_url": "https://example.com", "custom_key": "abc123" });

    let first = app.server.post("/short-urls").json(&payload).await;
    assert_eq!(first.status_code(), 201);

    let second = app.server.post("/short-urls").json(&payload).await;
    assert_eq!(second.status_code(), 409);

    let body: Value = second.json();
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_create_rejects_invalid_url() {
    let app = common::spawn_app();

    for bad_url in ["not-a-url", "ftp://example.com/x", ""] {
        let response = app
            .server
            .post("/short-urls")
            .json(&json!({ "original_url": bad_url }))
            .await;

        assert_eq!(response.status_code(), 400, "url: {bad_url:?}");

        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_create_rejects_bad_custom_key_format() {
    let app = common::spawn_app();

    for bad_key in ["short", "toolong1", "bad-k1", "bad k1"] {
        let response = app
            .server
            .post("/short-urls")
            .json(&json!({ "original_url": "https://example.com", "custom_key": bad_key }))
            .await;

        assert_eq!(response.status_code(), 400, "key: {bad_key:?}");
    }
}

#[tokio::test]
async fn test_create_rejects_out_of_range_expiry() {
    let app = common::spawn_app();

    for days in [0, -3, 366] {
        let response = app
            .server
            .post("/short-urls")
            .json(&json!({ "original_url": "https://example.com", "expires_days": days }))
            .await;

        assert_eq!(response.status_code(), 400, "days: {days}");
    }
}

#[tokio::test]
async fn test_create_records_no_clicks() {
    let mut app = common::spawn_app();

    app.server
        .post("/short-urls")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    assert!(app.click_rx.try_recv().is_err());
}
