//! Threat feed endpoint handlers.
//!
//! Threats live in the in-memory store shared with the synthetic feed job.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::threat::{CreateThreatRequest, Threat};

/// Response payload for the threat list.
#[derive(Debug, Serialize)]
pub struct ThreatListResponse {
    pub data: Vec<Threat>,
    pub total: usize,
}

/// List all threats in append order.
///
/// GET /api/v1/threats
pub async fn list_threats(State(state): State<AppState>) -> Json<ThreatListResponse> {
    let data = state.stores.threats.list();
    let total = data.len();
    Json(ThreatListResponse { data, total })
}

/// Report a threat manually.
///
/// POST /api/v1/threats
pub async fn create_threat(
    State(state): State<AppState>,
    Json(request): Json<CreateThreatRequest>,
) -> Result<(StatusCode, Json<Threat>), ApiError> {
    request.validate()?;

    let threat = Threat::from(request);
    if !state.stores.threats.append(threat.clone()) {
        return Err(ApiError::Conflict(
            "Threat store is at capacity".to_string(),
        ));
    }

    info!(threat_id = %threat.id, severity = %threat.severity, "Threat reported");

    Ok((StatusCode::CREATED, Json(threat)))
}
