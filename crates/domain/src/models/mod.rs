//! Domain models for Labstack.

pub mod movie;
pub mod security_event;
pub mod threat;
pub mod user;
pub mod vulnerability;

pub use movie::Movie;
pub use security_event::{EventStatus, SecurityEvent};
pub use threat::{Threat, ThreatCategory, ThreatLocation, ThreatSeverity};
pub use user::User;
pub use vulnerability::{Vulnerability, VulnerabilityStatus};
