//! Vulnerability endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::vulnerability::{CreateVulnerabilityRequest, Vulnerability};

/// Response payload for the vulnerability list.
#[derive(Debug, Serialize)]
pub struct VulnerabilityListResponse {
    pub data: Vec<Vulnerability>,
    pub total: usize,
}

/// List all tracked vulnerabilities in append order.
///
/// GET /api/v1/vulnerabilities
pub async fn list_vulnerabilities(
    State(state): State<AppState>,
) -> Json<VulnerabilityListResponse> {
    let data = state.stores.vulnerabilities.list();
    let total = data.len();
    Json(VulnerabilityListResponse { data, total })
}

/// Report a vulnerability.
///
/// POST /api/v1/vulnerabilities
pub async fn create_vulnerability(
    State(state): State<AppState>,
    Json(request): Json<CreateVulnerabilityRequest>,
) -> Result<(StatusCode, Json<Vulnerability>), ApiError> {
    request.validate()?;

    let vulnerability = Vulnerability::from(request);
    if !state.stores.vulnerabilities.append(vulnerability.clone()) {
        return Err(ApiError::Conflict(
            "Vulnerability store is at capacity".to_string(),
        ));
    }

    info!(
        vulnerability_id = %vulnerability.id,
        cve = %vulnerability.cve,
        "Vulnerability reported"
    );

    Ok((StatusCode::CREATED, Json(vulnerability)))
}
