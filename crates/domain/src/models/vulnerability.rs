//! Vulnerability tracking domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use super::threat::ThreatSeverity;

lazy_static::lazy_static! {
    static ref CVE_REGEX: regex::Regex =
        regex::Regex::new(r"^CVE-\d{4}-\d{4,}$").unwrap();
}

/// Remediation state of a tracked vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VulnerabilityStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Patched,
}

impl VulnerabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VulnerabilityStatus::Open => "Open",
            VulnerabilityStatus::InProgress => "In Progress",
            VulnerabilityStatus::Patched => "Patched",
        }
    }
}

impl fmt::Display for VulnerabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked vulnerability with its CVSS score and affected hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: Uuid,
    pub cve: String,
    pub severity: ThreatSeverity,
    pub score: f64,
    pub description: String,
    pub affected_systems: Vec<String>,
    pub status: VulnerabilityStatus,
    pub discovered: DateTime<Utc>,
}

/// Request payload for reporting a vulnerability.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVulnerabilityRequest {
    #[validate(regex(path = "*CVE_REGEX", message = "CVE id must look like CVE-2024-1234"))]
    pub cve: String,

    pub severity: ThreatSeverity,

    #[validate(custom(function = "shared::validation::validate_cvss_score"))]
    pub score: f64,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Description must be between 1 and 500 characters"
    ))]
    pub description: String,

    #[validate(length(min = 1, message = "At least one affected system is required"))]
    pub affected_systems: Vec<String>,

    pub status: VulnerabilityStatus,
}

impl From<CreateVulnerabilityRequest> for Vulnerability {
    fn from(request: CreateVulnerabilityRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            cve: request.cve,
            severity: request.severity,
            score: request.score,
            description: request.description,
            affected_systems: request.affected_systems,
            status: request.status,
            discovered: Utc::now(),
        }
    }
}
