//! Threat intelligence domain model.
//!
//! Threat records back the simulated monitoring dashboard. They live in an
//! in-memory store only and are lost on restart.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Threat severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatSeverity {
    pub const ALL: [ThreatSeverity; 4] = [
        ThreatSeverity::Low,
        ThreatSeverity::Medium,
        ThreatSeverity::High,
        ThreatSeverity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatSeverity::Low => "Low",
            ThreatSeverity::Medium => "Medium",
            ThreatSeverity::High => "High",
            ThreatSeverity::Critical => "Critical",
        }
    }
}

impl fmt::Display for ThreatSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThreatSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(ThreatSeverity::Low),
            "Medium" => Ok(ThreatSeverity::Medium),
            "High" => Ok(ThreatSeverity::High),
            "Critical" => Ok(ThreatSeverity::Critical),
            _ => Err(format!(
                "Invalid severity: {}. Must be one of: Low, Medium, High, Critical",
                s
            )),
        }
    }
}

/// Category of a detected threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatCategory {
    #[serde(rename = "Malicious IP")]
    MaliciousIp,
    #[serde(rename = "Botnet C&C")]
    BotnetC2,
    Phishing,
    #[serde(rename = "Malware Distribution")]
    MalwareDistribution,
}

impl ThreatCategory {
    pub const ALL: [ThreatCategory; 4] = [
        ThreatCategory::MaliciousIp,
        ThreatCategory::BotnetC2,
        ThreatCategory::Phishing,
        ThreatCategory::MalwareDistribution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatCategory::MaliciousIp => "Malicious IP",
            ThreatCategory::BotnetC2 => "Botnet C&C",
            ThreatCategory::Phishing => "Phishing",
            ThreatCategory::MalwareDistribution => "Malware Distribution",
        }
    }
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Approximate geographic origin of a threat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ThreatLocation {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub lat: f64,
    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub lng: f64,
    pub country: String,
}

/// A single threat intelligence record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threat {
    pub id: Uuid,
    pub ip: String,
    pub category: ThreatCategory,
    pub severity: ThreatSeverity,
    pub source: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub location: ThreatLocation,
}

impl Threat {
    /// Fabricates a random threat record for the simulated feed.
    pub fn synthetic() -> Self {
        const COUNTRIES: [&str; 5] = ["USA", "China", "Russia", "Germany", "UK"];

        let mut rng = rand::thread_rng();
        let ip = format!(
            "{}.{}.{}.{}",
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255)
        );

        Self {
            id: Uuid::new_v4(),
            ip,
            category: *ThreatCategory::ALL.choose(&mut rng).unwrap(),
            severity: *ThreatSeverity::ALL.choose(&mut rng).unwrap(),
            source: "Automated Detection".to_string(),
            description: "Automatically detected suspicious activity".to_string(),
            timestamp: Utc::now(),
            location: ThreatLocation {
                lat: rng.gen_range(-90.0..=90.0),
                lng: rng.gen_range(-180.0..=180.0),
                country: COUNTRIES.choose(&mut rng).unwrap().to_string(),
            },
        }
    }
}

/// Request payload for reporting a threat manually.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThreatRequest {
    #[validate(length(min = 1, max = 45, message = "IP address must be between 1 and 45 characters"))]
    pub ip: String,

    pub category: ThreatCategory,

    pub severity: ThreatSeverity,

    #[validate(length(min = 1, max = 100, message = "Source must be between 1 and 100 characters"))]
    pub source: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Description must be between 1 and 500 characters"
    ))]
    pub description: String,

    #[validate(nested)]
    pub location: ThreatLocation,
}

impl From<CreateThreatRequest> for Threat {
    fn from(request: CreateThreatRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            ip: request.ip,
            category: request.category,
            severity: request.severity,
            source: request.source,
            description: request.description,
            timestamp: Utc::now(),
            location: request.location,
        }
    }
}
