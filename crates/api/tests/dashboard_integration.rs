//! Integration tests for dashboard statistics endpoints.
//!
//! Tests cover:
//! - GET /api/v1/dashboard/stats (threat, event and vulnerability breakdowns)
//!
//! Runs without a database; only the in-memory stores are exercised.

mod common;

use axum::http::StatusCode;
use common::{
    create_lazy_pool, create_test_app, create_test_app_with_store, create_test_app_with_stores,
    get_request, parse_response_body, test_config,
};
use domain::models::{Threat, ThreatSeverity};
use persistence::{DashboardStores, ThreatStore};
use std::sync::Arc;
use tower::ServiceExt;

fn threat_with_severity(severity: ThreatSeverity) -> Threat {
    let mut threat = Threat::synthetic();
    threat.severity = severity;
    threat
}

#[tokio::test]
async fn test_dashboard_stats_empty_store() {
    let app = create_test_app(test_config(), create_lazy_pool());

    let response = app
        .oneshot(get_request("/api/v1/dashboard/stats"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["threats"]["total"].as_i64().unwrap(), 0);
    assert_eq!(body["threats"]["critical"].as_i64().unwrap(), 0);
    assert_eq!(body["events"]["total"].as_i64().unwrap(), 0);
    assert_eq!(body["vulnerabilities"]["total"].as_i64().unwrap(), 0);
    assert_eq!(body["capacity"].as_i64().unwrap(), 50);
}

#[tokio::test]
async fn test_dashboard_stats_cover_all_collections() {
    let stores = DashboardStores::with_capacity(50);
    stores.seed_samples();
    let app = create_test_app_with_stores(test_config(), create_lazy_pool(), stores);

    let response = app
        .oneshot(get_request("/api/v1/dashboard/stats"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["threats"]["total"].as_i64().unwrap(), 2);
    assert_eq!(body["threats"]["critical"].as_i64().unwrap(), 1);

    // Seeded events are freshly timestamped, so both land in the 24h window
    assert_eq!(body["events"]["total"].as_i64().unwrap(), 2);
    assert_eq!(body["events"]["last_24h"].as_i64().unwrap(), 2);

    // One seeded vulnerability is open, the other already patched
    assert_eq!(body["vulnerabilities"]["total"].as_i64().unwrap(), 2);
    assert_eq!(body["vulnerabilities"]["critical"].as_i64().unwrap(), 1);
    assert_eq!(body["vulnerabilities"]["open"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_dashboard_stats_severity_breakdown() {
    let store = Arc::new(ThreatStore::with_capacity(50));
    store.append(threat_with_severity(ThreatSeverity::Critical));
    store.append(threat_with_severity(ThreatSeverity::Critical));
    store.append(threat_with_severity(ThreatSeverity::High));
    store.append(threat_with_severity(ThreatSeverity::Low));

    let app = create_test_app_with_store(test_config(), create_lazy_pool(), store);

    let response = app
        .oneshot(get_request("/api/v1/dashboard/stats"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let threats = &body["threats"];
    assert_eq!(threats["total"].as_i64().unwrap(), 4);
    assert_eq!(threats["critical"].as_i64().unwrap(), 2);
    assert_eq!(threats["high"].as_i64().unwrap(), 1);
    assert_eq!(threats["medium"].as_i64().unwrap(), 0);
    assert_eq!(threats["low"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_dashboard_stats_counts_are_consistent() {
    let store = Arc::new(ThreatStore::with_capacity(50));
    for _ in 0..10 {
        store.append(Threat::synthetic());
    }

    let app = create_test_app_with_store(test_config(), create_lazy_pool(), store);

    let response = app
        .oneshot(get_request("/api/v1/dashboard/stats"))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    let threats = &body["threats"];
    let sum = threats["critical"].as_i64().unwrap()
        + threats["high"].as_i64().unwrap()
        + threats["medium"].as_i64().unwrap()
        + threats["low"].as_i64().unwrap();

    assert_eq!(threats["total"].as_i64().unwrap(), 10);
    assert_eq!(sum, 10);
}
