//! Dashboard statistics endpoint handlers.

use axum::{extract::State, Json};
use domain::models::ThreatSeverity;
use serde::Serialize;

use crate::app::AppState;

/// Severity breakdown of the threat feed.
#[derive(Debug, Serialize)]
pub struct ThreatBreakdown {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Recency breakdown of recorded security events.
#[derive(Debug, Serialize)]
pub struct EventBreakdown {
    pub total: usize,
    pub last_24h: usize,
}

/// Remediation breakdown of tracked vulnerabilities.
#[derive(Debug, Serialize)]
pub struct VulnerabilityBreakdown {
    pub total: usize,
    pub critical: usize,
    pub open: usize,
}

/// Dashboard statistics response.
#[derive(Debug, Serialize)]
pub struct DashboardStatsResponse {
    pub threats: ThreatBreakdown,
    pub events: EventBreakdown,
    pub vulnerabilities: VulnerabilityBreakdown,
    /// Capacity ceiling shared by the in-memory stores, for gauge rendering.
    pub capacity: usize,
}

/// Aggregate dashboard statistics over the in-memory stores.
///
/// GET /api/v1/dashboard/stats
pub async fn get_dashboard_stats(State(state): State<AppState>) -> Json<DashboardStatsResponse> {
    let threats = &state.stores.threats;
    let events = &state.stores.events;
    let vulnerabilities = &state.stores.vulnerabilities;

    Json(DashboardStatsResponse {
        threats: ThreatBreakdown {
            total: threats.count(),
            critical: threats.count_by_severity(ThreatSeverity::Critical),
            high: threats.count_by_severity(ThreatSeverity::High),
            medium: threats.count_by_severity(ThreatSeverity::Medium),
            low: threats.count_by_severity(ThreatSeverity::Low),
        },
        events: EventBreakdown {
            total: events.count(),
            last_24h: events.count_last_24h(),
        },
        vulnerabilities: VulnerabilityBreakdown {
            total: vulnerabilities.count(),
            critical: vulnerabilities.count_by_severity(ThreatSeverity::Critical),
            open: vulnerabilities.count_open(),
        },
        capacity: threats.capacity(),
    })
}
