//! Integration tests for the read-only lookup endpoints.

mod helpers;

use http::StatusCode;

use helpers::{JPEG_BYTES, TestApp};

#[tokio::test]
async fn test_get_by_id_returns_record() {
    let app = TestApp::new().await;
    let uploaded = app.upload_image("cat.jpg", "image/jpeg", JPEG_BYTES).await;
    let id = uploaded.body["id"].as_str().unwrap().to_string();

    let response = app.request("GET", &format!("/api/images/by-id/{id}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], uploaded.body["id"]);
    assert_eq!(response.body["original_filename"], "cat.jpg");
    assert!(response.body["image"].as_str().unwrap().contains("/media/"));
    assert!(response.body.get("created_at").is_some());
    assert!(response.body.get("updated_at").is_some());
}

#[tokio::test]
async fn test_get_by_unknown_id_is_404() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/images/by-id/00000000-0000-0000-0000-999999999999")
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_by_name_returns_record() {
    let app = TestApp::new().await;
    app.upload_image("sunset.png", "image/png", b"\x89PNG\r\n\x1a\nfake-png").await;

    let response = app.request("GET", "/api/images/by-name/sunset.png").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["original_filename"], "sunset.png");
}

#[tokio::test]
async fn test_get_by_unknown_name_is_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/images/by-name/ghost.jpg").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_name_lookup_returns_newest() {
    let app = TestApp::new().await;
    app.upload_image("cat.jpg", "image/jpeg", JPEG_BYTES).await;
    let second = app.upload_image("cat.jpg", "image/jpeg", JPEG_BYTES).await;

    let response = app.request("GET", "/api/images/by-name/cat.jpg").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], second.body["id"]);
}

#[tokio::test]
async fn test_list_all_is_newest_first() {
    let app = TestApp::new().await;
    let first = app.upload_image("a.jpg", "image/jpeg", JPEG_BYTES).await;
    let second = app.upload_image("b.jpg", "image/jpeg", JPEG_BYTES).await;
    let third = app.upload_image("c.jpg", "image/jpeg", JPEG_BYTES).await;

    let response = app.request("GET", "/api/images/all").await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], third.body["id"]);
    assert_eq!(items[1]["id"], second.body["id"]);
    assert_eq!(items[2]["id"], first.body["id"]);
}

#[tokio::test]
async fn test_list_all_empty() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/images/all").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
