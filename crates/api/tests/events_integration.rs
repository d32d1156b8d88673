//! Integration tests for security event endpoints.
//!
//! Tests cover:
//! - GET /api/v1/events (list recorded events)
//! - POST /api/v1/events (record an event)
//!
//! The event store is in-memory, so this suite runs without a database;
//! the pool handed to the app is lazy and never connected.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_lazy_pool, create_test_app, create_test_app_with_stores, get_request, json_request,
    parse_response_body, test_config,
};
use persistence::DashboardStores;
use serde_json::json;
use tower::ServiceExt;

fn sample_event_body() -> serde_json::Value {
    json!({
        "type": "Port Scan",
        "severity": "Low",
        "source_ip": "198.51.100.77",
        "target": "edge-firewall",
        "status": "Detected"
    })
}

#[tokio::test]
async fn test_list_events_empty() {
    let app = create_test_app(test_config(), create_lazy_pool());

    let response = app.oneshot(get_request("/api/v1/events")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["total"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_list_events_includes_seeded_samples() {
    let stores = DashboardStores::with_capacity(50);
    stores.events.seed_samples();
    let app = create_test_app_with_stores(test_config(), create_lazy_pool(), stores);

    let response = app.oneshot(get_request("/api/v1/events")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["type"].as_str().unwrap(), "Failed Login Attempt");
    assert_eq!(data[1]["status"].as_str().unwrap(), "Quarantined");
}

#[tokio::test]
async fn test_create_event_success() {
    let app = create_test_app(test_config(), create_lazy_pool());

    let request = json_request(Method::POST, "/api/v1/events", sample_event_body());
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["type"].as_str().unwrap(), "Port Scan");
    assert_eq!(body["source_ip"].as_str().unwrap(), "198.51.100.77");
    assert!(body["id"].as_str().is_some());
    assert!(body["timestamp"].as_str().is_some());

    // The record is visible in subsequent reads
    let response = app.oneshot(get_request("/api/v1/events")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_create_event_unknown_status_rejected() {
    let app = create_test_app(test_config(), create_lazy_pool());

    // Status names are fixed strings; anything else is rejected at
    // deserialization before validation runs.
    let mut body = sample_event_body();
    body["status"] = json!("Escalated");

    let request = json_request(Method::POST, "/api/v1/events", body);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_event_empty_target() {
    let app = create_test_app(test_config(), create_lazy_pool());

    let mut body = sample_event_body();
    body["target"] = json!("");

    let request = json_request(Method::POST, "/api/v1/events", body);
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response_body = parse_response_body(response).await;
    assert_eq!(response_body["error"].as_str().unwrap(), "validation_error");

    // Nothing was stored
    let response = app.oneshot(get_request("/api/v1/events")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_create_event_store_at_capacity() {
    let stores = DashboardStores::with_capacity(1);
    let app = create_test_app_with_stores(test_config(), create_lazy_pool(), stores);

    let request = json_request(Method::POST, "/api/v1/events", sample_event_body());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = json_request(Method::POST, "/api/v1/events", sample_event_body());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.oneshot(get_request("/api/v1/events")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"].as_i64().unwrap(), 1);
}
