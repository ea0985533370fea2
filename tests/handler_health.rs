mod common;

use axum::http::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let store = common::memory_store();
    common::insert_record(store.as_ref(), "one", Some("https://example.com")).await;
    let server = common::create_test_server(store);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "Connected, 1 slugs");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let server = common::create_test_server(Arc::new(common::FailingStore));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_home_page() {
    let server = common::create_test_server(common::memory_store());

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("qr.example.com"));
}
