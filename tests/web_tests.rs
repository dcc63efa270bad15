//! HTTP API tests
//!
//! Requests go straight through the router with `oneshot`, so no socket is
//! bound. Per-IP rate limiting is not applied here because it needs the
//! peer address from a real connection.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use plant_resolver::web::server::{routes, AppState, MAX_REQUEST_BODY_SIZE};
use plant_resolver::ProductCatalog;

fn app() -> Router {
    let catalog = ProductCatalog::load_embedded().expect("embedded catalog should load");
    routes(Arc::new(AppState::new(catalog)))
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(request: Request<Body>) -> axum::response::Response {
    app().oneshot(request).await.unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = send(get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_security_headers_present() {
    let response = send(get("/")).await;
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(
        headers["referrer-policy"],
        "strict-origin-when-cross-origin"
    );
}

#[tokio::test]
async fn test_resolve_against_server_catalog() {
    let body = r#"{"candidates": [
        {"scientificName": "Aloe vera", "genus": "Aloe", "confidence": 45}
    ]}"#;
    let response = send(post_json("/api/resolve", body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["tier"], "low");
    assert_eq!(json["match"]["status"], "matched");
    assert_eq!(json["match"]["product"]["id"], "aloe-vera-plant");
    assert_eq!(json["care"]["rule_id"], "succulent_cactus");
}

#[tokio::test]
async fn test_resolve_with_request_catalog() {
    let body = r#"{
        "candidates": [{"scientific_name": "tulsi ocimum sanctum", "genus": "ocimum", "confidence": 92}],
        "catalog": [{"id": "t1", "name": "Tulsi Plant"}]
    }"#;
    let response = send(post_json("/api/resolve", body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["tier"], "high");
    assert_eq!(json["match"]["product"]["id"], "t1");
    assert_eq!(json["care"]["rule_id"], "default");
}

#[tokio::test]
async fn test_resolve_empty_candidates() {
    let response = send(post_json("/api/resolve", r#"{"candidates": []}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["tier"].is_null());
    assert_eq!(json["match"]["status"], "skipped");
    assert!(json["care"].is_null());
}

#[tokio::test]
async fn test_resolve_rejects_malformed_json() {
    let response = send(post_json("/api/resolve", "{ not json")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error_type"], "invalid_request");
    assert!(json["details"].is_null());
}

#[tokio::test]
async fn test_resolve_requires_json_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/resolve")
        .body(Body::from(r#"{"candidates": []}"#))
        .unwrap();
    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

fn numbered_candidate(i: usize) -> serde_json::Value {
    serde_json::json!({ "scientific_name": format!("species {i}"), "confidence": 50 })
}

#[tokio::test]
async fn test_resolve_rejects_too_many_candidates() {
    let candidates: Vec<_> = (0..101).map(numbered_candidate).collect();
    let body = serde_json::json!({ "candidates": candidates }).to_string();

    let response = send(post_json("/api/resolve", body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error_type"], "too_many_candidates");
}

#[tokio::test]
async fn test_resolve_rejects_negative_price_catalog() {
    let body = r#"{
        "candidates": [{"scientific_name": "rosa", "confidence": 70}],
        "catalog": [{"id": "r", "name": "Rose", "price": -3.0}]
    }"#;
    let response = send(post_json("/api/resolve", body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_type"], "invalid_catalog");
}

#[tokio::test]
async fn test_resolve_rejects_oversized_body() {
    let padding = "x".repeat(MAX_REQUEST_BODY_SIZE + 1);
    let body = format!(r#"{{"candidates": [], "padding": "{padding}"}}"#);

    let response = send(post_json("/api/resolve", body)).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_catalog_endpoint() {
    let response = send(get("/api/catalog")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let products = json["products"].as_array().unwrap();
    assert_eq!(json["count"], products.len());
    assert_eq!(products[0]["id"], "tulsi-plant");
}

#[tokio::test]
async fn test_rules_endpoint_lists_in_order() {
    let response = send(get("/api/rules")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    let expected = vec![
        "succulent_cactus",
        "fern",
        "snake_plant_dracaena",
        "pothos_philodendron",
        "rose",
        "default",
    ];
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_unknown_route() {
    let response = send(get("/api/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
