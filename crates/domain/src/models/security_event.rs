//! Security event domain model.
//!
//! Events record things the monitoring stack reacted to (blocked logins,
//! quarantined malware). Like threats they live in an in-memory store only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use super::threat::ThreatSeverity;

/// Disposition of a security event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Detected,
    Blocked,
    Quarantined,
    Resolved,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Detected => "Detected",
            EventStatus::Blocked => "Blocked",
            EventStatus::Quarantined => "Quarantined",
            EventStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single security event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: String,
    pub severity: ThreatSeverity,
    pub source_ip: String,
    pub target: String,
    pub timestamp: DateTime<Utc>,
    pub status: EventStatus,
}

/// Request payload for reporting a security event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSecurityEventRequest {
    #[serde(rename = "type")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Event type must be between 1 and 100 characters"
    ))]
    pub event_type: String,

    pub severity: ThreatSeverity,

    #[validate(length(
        min = 1,
        max = 45,
        message = "Source IP must be between 1 and 45 characters"
    ))]
    pub source_ip: String,

    #[validate(length(min = 1, max = 255, message = "Target must be between 1 and 255 characters"))]
    pub target: String,

    pub status: EventStatus,
}

impl From<CreateSecurityEventRequest> for SecurityEvent {
    fn from(request: CreateSecurityEventRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type: request.event_type,
            severity: request.severity,
            source_ip: request.source_ip,
            target: request.target,
            timestamp: Utc::now(),
            status: request.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateSecurityEventRequest {
        CreateSecurityEventRequest {
            event_type: "Failed Login Attempt".to_string(),
            severity: ThreatSeverity::Medium,
            source_ip: "203.0.113.5".to_string(),
            target: "admin@company.com".to_string(),
            status: EventStatus::Blocked,
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_empty_target_rejected() {
        let mut request = valid_request();
        request.target = String::new();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("target"));
    }

    #[test]
    fn test_event_type_serializes_as_type() {
        let event = SecurityEvent::from(valid_request());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Failed Login Attempt");
        assert_eq!(json["status"], "Blocked");
        assert!(json.get("event_type").is_none());
    }

    #[test]
    fn test_event_from_request_assigns_id_and_timestamp() {
        let event = SecurityEvent::from(valid_request());
        assert!(!event.id.is_nil());
        assert_eq!(event.source_ip, "203.0.113.5");
        assert_eq!(event.severity, ThreatSeverity::Medium);
    }
}
