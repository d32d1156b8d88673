//! Integration tests for threat feed endpoints.
//!
//! Tests cover:
//! - GET /api/v1/threats (list threats)
//! - POST /api/v1/threats (report a threat manually)
//!
//! The threat store is in-memory, so this suite runs without a database;
//! the pool handed to the app is lazy and never connected.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_lazy_pool, create_test_app, create_test_app_with_store, get_request, json_request,
    parse_response_body, test_config,
};
use persistence::ThreatStore;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn sample_threat_body() -> serde_json::Value {
    json!({
        "ip": "203.0.113.5",
        "category": "Phishing",
        "severity": "High",
        "source": "Abuse Report",
        "description": "Credential harvesting page",
        "location": {
            "lat": 51.5,
            "lng": -0.13,
            "country": "UK"
        }
    })
}

// =============================================================================
// GET /api/v1/threats Tests
// =============================================================================

#[tokio::test]
async fn test_list_threats_empty() {
    let app = create_test_app(test_config(), create_lazy_pool());

    let response = app.oneshot(get_request("/api/v1/threats")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["total"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_list_threats_includes_seeded_samples() {
    let store = Arc::new(ThreatStore::with_capacity(50));
    store.seed_samples();
    let app = create_test_app_with_store(test_config(), create_lazy_pool(), store);

    let response = app.oneshot(get_request("/api/v1/threats")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(body["total"].as_i64().unwrap(), 2);
    assert_eq!(data[0]["ip"].as_str().unwrap(), "192.168.1.100");
    assert_eq!(data[1]["severity"].as_str().unwrap(), "Critical");
}

// =============================================================================
// POST /api/v1/threats Tests
// =============================================================================

#[tokio::test]
async fn test_create_threat_success() {
    let app = create_test_app(test_config(), create_lazy_pool());

    let request = json_request(Method::POST, "/api/v1/threats", sample_threat_body());
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["ip"].as_str().unwrap(), "203.0.113.5");
    assert_eq!(body["category"].as_str().unwrap(), "Phishing");
    assert_eq!(body["severity"].as_str().unwrap(), "High");
    assert!(body["id"].as_str().is_some());
    assert!(body["timestamp"].as_str().is_some());

    // The record is visible in subsequent reads
    let response = app.oneshot(get_request("/api/v1/threats")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_create_threat_spoofed_category_name() {
    let app = create_test_app(test_config(), create_lazy_pool());

    // Category names are fixed strings; anything else is rejected at
    // deserialization before validation runs.
    let mut body = sample_threat_body();
    body["category"] = json!("Ransomware");

    let request = json_request(Method::POST, "/api/v1/threats", body);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_threat_invalid_location() {
    let app = create_test_app(test_config(), create_lazy_pool());

    let mut body = sample_threat_body();
    body["location"]["lat"] = json!(123.0);

    let request = json_request(Method::POST, "/api/v1/threats", body);
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"].as_str().unwrap(), "validation_error");

    // The failing field sits inside the nested location object; it still
    // shows up in details under its full path.
    let details = body["details"].as_array().unwrap();
    assert!(!details.is_empty());
    assert!(details
        .iter()
        .any(|d| d["field"].as_str() == Some("location.lat")));

    // Nothing was stored
    let response = app.oneshot(get_request("/api/v1/threats")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_create_threat_empty_description() {
    let app = create_test_app(test_config(), create_lazy_pool());

    let mut body = sample_threat_body();
    body["description"] = json!("");

    let request = json_request(Method::POST, "/api/v1/threats", body);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_threat_store_at_capacity() {
    let store = Arc::new(ThreatStore::with_capacity(1));
    let app = create_test_app_with_store(test_config(), create_lazy_pool(), store);

    let request = json_request(Method::POST, "/api/v1/threats", sample_threat_body());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Second report is refused; the store never exceeds its ceiling
    let request = json_request(Method::POST, "/api/v1/threats", sample_threat_body());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.oneshot(get_request("/api/v1/threats")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"].as_i64().unwrap(), 1);
}
