//! Security event endpoint handlers.
//!
//! Events live in the in-memory store shared with the dashboard.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::security_event::{CreateSecurityEventRequest, SecurityEvent};

/// Response payload for the event list.
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub data: Vec<SecurityEvent>,
    pub total: usize,
}

/// List all security events in append order.
///
/// GET /api/v1/events
pub async fn list_events(State(state): State<AppState>) -> Json<EventListResponse> {
    let data = state.stores.events.list();
    let total = data.len();
    Json(EventListResponse { data, total })
}

/// Record a security event.
///
/// POST /api/v1/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateSecurityEventRequest>,
) -> Result<(StatusCode, Json<SecurityEvent>), ApiError> {
    request.validate()?;

    let event = SecurityEvent::from(request);
    if !state.stores.events.append(event.clone()) {
        return Err(ApiError::Conflict(
            "Event store is at capacity".to_string(),
        ));
    }

    info!(event_id = %event.id, event_type = %event.event_type, "Security event recorded");

    Ok((StatusCode::CREATED, Json(event)))
}
