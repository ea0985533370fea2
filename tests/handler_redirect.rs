mod common;

use axum::http::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let store = common::memory_store();
    common::insert_record(store.as_ref(), "wow-doge", Some("https://example.com/page")).await;
    let server = common::create_test_server(store);

    let response = server.get("/wow-doge").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let store = common::memory_store();
    common::insert_record(store.as_ref(), "wow-doge", Some("https://example.com/page")).await;
    let server = common::create_test_server(store);

    let response = server.get("/WOW-DOGE").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Could not find the requested resource"));
}

#[tokio::test]
async fn test_redirect_not_found_page() {
    let server = common::create_test_server(common::memory_store());

    let response = server.get("/never-registered").await;

    response.assert_status_not_found();
    let body = response.text();
    assert!(body.contains("Not Found"));
    assert!(body.contains("Return Home"));
    assert!(body.contains("href=\"/\""));
}

#[tokio::test]
async fn test_redirect_record_without_url_is_not_found() {
    let store = common::memory_store();
    common::insert_record(store.as_ref(), "orphan", None).await;
    common::insert_record(store.as_ref(), "blank", Some("")).await;
    let server = common::create_test_server(store);

    server.get("/orphan").await.assert_status_not_found();
    server.get("/blank").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_repeatable() {
    let store = common::memory_store();
    common::insert_record(store.as_ref(), "again", Some("https://example.com/again")).await;
    let server = common::create_test_server(store);

    for _ in 0..3 {
        let response = server.get("/again").await;
        assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.header("location"), "https://example.com/again");
    }
}

#[tokio::test]
async fn test_redirect_store_unavailable() {
    let server = common::create_test_server(Arc::new(common::FailingStore));

    let response = server.get("/wow-doge").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.text().contains("Something went wrong"));
}

#[tokio::test]
async fn test_unknown_nested_path_uses_fallback() {
    let server = common::create_test_server(common::memory_store());

    let response = server.get("/a/b/c").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Not Found"));
}
