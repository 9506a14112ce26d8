mod common;

use axum::{
    body::Body,
    http::{header, Request},
};
use common::build_test_app;
use tower::ServiceExt;

async fn allow_origin_for(vars: &[(&str, &str)], origin: &str) -> Option<String> {
    let app = build_test_app(vars).await;
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/financial-summary")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string())
}

#[tokio::test]
async fn default_config_grants_no_cross_origin_access() {
    assert_eq!(allow_origin_for(&[], "http://evil.example").await, None);
}

#[tokio::test]
async fn wildcard_config_allows_any_origin() {
    let vars = [("TRIP_CORS_ALLOW_ORIGINS", "*")];
    assert_eq!(
        allow_origin_for(&vars, "http://anywhere.example").await.as_deref(),
        Some("*")
    );
}

#[tokio::test]
async fn allow_list_echoes_only_listed_origins() {
    let vars = [("TRIP_CORS_ALLOW_ORIGINS", "http://localhost:5173")];
    assert_eq!(
        allow_origin_for(&vars, "http://localhost:5173").await.as_deref(),
        Some("http://localhost:5173")
    );
    assert_eq!(allow_origin_for(&vars, "http://evil.example").await, None);
}
