mod common;

use axum::http::StatusCode;
use common::build_test_app;

#[tokio::test]
async fn healthz_works() {
    let app = build_test_app(&[]).await;
    let (status, body) = app.get("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn readyz_touches_the_store() {
    let app = build_test_app(&[]).await;
    let (status, _) = app.get("/readyz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_lists_endpoints() {
    let app = build_test_app(&[]).await;
    let (status, doc) = app.get("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    for path in [
        "/activities",
        "/activities/{id}/complete",
        "/wishlist",
        "/wishlist/{id}/purchase",
        "/financial-summary",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }
}
