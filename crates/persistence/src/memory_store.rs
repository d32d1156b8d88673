//! In-memory dashboard stores.
//!
//! Backing storage for the simulated monitoring dashboard. Records are
//! append-only and process-local: contents are lost on restart, by design.
//! The stores are injected capabilities so the feed job and the HTTP routes
//! share one instance and tests can drive them deterministically.

use std::sync::{Arc, RwLock};

use chrono::{Duration, Utc};
use domain::models::{
    EventStatus, SecurityEvent, Threat, ThreatCategory, ThreatLocation, ThreatSeverity,
    Vulnerability, VulnerabilityStatus,
};

/// Capacity-bounded, append-only collection of records.
///
/// Once the ceiling is reached further appends are refused; nothing is ever
/// evicted. Readers may observe a list shorter than a concurrent writer's
/// view, which is acceptable for dashboard data.
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
    capacity: usize,
}

impl<T> MemoryStore<T> {
    /// Creates an empty store with the given capacity ceiling.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            capacity,
        }
    }

    /// The configured capacity ceiling.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a record. Returns false (and drops the record) when the
    /// store is at capacity.
    pub fn append(&self, record: T) -> bool {
        let mut records = self.records.write().unwrap();
        if records.len() >= self.capacity {
            return false;
        }
        records.push(record);
        true
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Number of stored records matching the predicate.
    pub fn count_matching(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.records
            .read()
            .unwrap()
            .iter()
            .filter(|r| predicate(r))
            .count()
    }
}

impl<T: Clone> MemoryStore<T> {
    /// Snapshot of all records in append order.
    pub fn list(&self) -> Vec<T> {
        self.records.read().unwrap().clone()
    }
}

/// Threat intelligence records shared between the feed job and the routes.
pub type ThreatStore = MemoryStore<Threat>;

impl MemoryStore<Threat> {
    /// Number of stored threats with the given severity.
    pub fn count_by_severity(&self, severity: ThreatSeverity) -> usize {
        self.count_matching(|t| t.severity == severity)
    }

    /// Loads the initial sample records shown before the feed produces data.
    pub fn seed_samples(&self) {
        let samples = [
            Threat {
                id: uuid::Uuid::new_v4(),
                ip: "192.168.1.100".to_string(),
                category: ThreatCategory::MaliciousIp,
                severity: ThreatSeverity::High,
                source: "Internal Monitoring".to_string(),
                description: "Suspicious network activity detected".to_string(),
                timestamp: Utc::now(),
                location: ThreatLocation {
                    lat: 37.7749,
                    lng: -122.4194,
                    country: "USA".to_string(),
                },
            },
            Threat {
                id: uuid::Uuid::new_v4(),
                ip: "10.0.0.50".to_string(),
                category: ThreatCategory::BotnetC2,
                severity: ThreatSeverity::Critical,
                source: "Threat Feed".to_string(),
                description: "Command and control server identified".to_string(),
                timestamp: Utc::now(),
                location: ThreatLocation {
                    lat: 51.5074,
                    lng: -0.1278,
                    country: "UK".to_string(),
                },
            },
        ];

        for threat in samples {
            if !self.append(threat) {
                tracing::warn!("Threat store full while seeding samples");
                break;
            }
        }
    }
}

/// Security events recorded by the monitoring stack.
pub type EventStore = MemoryStore<SecurityEvent>;

impl MemoryStore<SecurityEvent> {
    /// Number of events recorded within the trailing 24 hours.
    pub fn count_last_24h(&self) -> usize {
        let cutoff = Utc::now() - Duration::hours(24);
        self.count_matching(|e| e.timestamp > cutoff)
    }

    /// Loads the initial sample records.
    pub fn seed_samples(&self) {
        let samples = [
            SecurityEvent {
                id: uuid::Uuid::new_v4(),
                event_type: "Failed Login Attempt".to_string(),
                severity: ThreatSeverity::Medium,
                source_ip: "203.0.113.5".to_string(),
                target: "admin@company.com".to_string(),
                timestamp: Utc::now(),
                status: EventStatus::Blocked,
            },
            SecurityEvent {
                id: uuid::Uuid::new_v4(),
                event_type: "Malware Detection".to_string(),
                severity: ThreatSeverity::High,
                source_ip: "198.51.100.23".to_string(),
                target: "workstation-05".to_string(),
                timestamp: Utc::now(),
                status: EventStatus::Quarantined,
            },
        ];

        for event in samples {
            if !self.append(event) {
                tracing::warn!("Event store full while seeding samples");
                break;
            }
        }
    }
}

/// Vulnerabilities tracked on the dashboard.
pub type VulnerabilityStore = MemoryStore<Vulnerability>;

impl MemoryStore<Vulnerability> {
    /// Number of vulnerabilities with the given severity.
    pub fn count_by_severity(&self, severity: ThreatSeverity) -> usize {
        self.count_matching(|v| v.severity == severity)
    }

    /// Number of vulnerabilities still awaiting remediation.
    pub fn count_open(&self) -> usize {
        self.count_matching(|v| v.status == VulnerabilityStatus::Open)
    }

    /// Loads the initial sample records.
    pub fn seed_samples(&self) {
        let samples = [
            Vulnerability {
                id: uuid::Uuid::new_v4(),
                cve: "CVE-2024-1234".to_string(),
                severity: ThreatSeverity::Critical,
                score: 9.8,
                description: "Remote code execution in web server".to_string(),
                affected_systems: vec![
                    "web-server-01".to_string(),
                    "web-server-02".to_string(),
                ],
                status: VulnerabilityStatus::Open,
                discovered: Utc::now(),
            },
            Vulnerability {
                id: uuid::Uuid::new_v4(),
                cve: "CVE-2024-5678".to_string(),
                severity: ThreatSeverity::High,
                score: 8.5,
                description: "SQL injection vulnerability in database".to_string(),
                affected_systems: vec!["db-server-01".to_string()],
                status: VulnerabilityStatus::Patched,
                discovered: Utc::now(),
            },
        ];

        for vulnerability in samples {
            if !self.append(vulnerability) {
                tracing::warn!("Vulnerability store full while seeding samples");
                break;
            }
        }
    }
}

/// The three in-memory collections behind the dashboard, bundled so startup
/// and tests can wire them as one unit. Each store carries the same capacity
/// ceiling.
#[derive(Clone)]
pub struct DashboardStores {
    pub threats: Arc<ThreatStore>,
    pub events: Arc<EventStore>,
    pub vulnerabilities: Arc<VulnerabilityStore>,
}

impl DashboardStores {
    /// Creates three empty stores sharing one capacity ceiling.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            threats: Arc::new(ThreatStore::with_capacity(capacity)),
            events: Arc::new(EventStore::with_capacity(capacity)),
            vulnerabilities: Arc::new(VulnerabilityStore::with_capacity(capacity)),
        }
    }

    /// Seeds every store with its initial sample records.
    pub fn seed_samples(&self) {
        self.threats.seed_samples();
        self.events.seed_samples();
        self.vulnerabilities.seed_samples();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_list_preserve_order() {
        let store = ThreatStore::with_capacity(10);
        let first = Threat::synthetic();
        let second = Threat::synthetic();

        assert!(store.append(first.clone()));
        assert!(store.append(second.clone()));

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[test]
    fn test_capacity_ceiling_never_exceeded() {
        let store = ThreatStore::with_capacity(5);
        for _ in 0..20 {
            store.append(Threat::synthetic());
        }
        assert_eq!(store.count(), 5);
        assert!(!store.append(Threat::synthetic()));
        assert_eq!(store.count(), 5);
    }

    #[test]
    fn test_count_by_severity() {
        let store = ThreatStore::with_capacity(10);
        let mut threat = Threat::synthetic();
        threat.severity = ThreatSeverity::Critical;
        store.append(threat);

        let mut threat = Threat::synthetic();
        threat.severity = ThreatSeverity::Low;
        store.append(threat);

        assert_eq!(store.count_by_severity(ThreatSeverity::Critical), 1);
        assert_eq!(store.count_by_severity(ThreatSeverity::Low), 1);
        assert_eq!(store.count_by_severity(ThreatSeverity::Medium), 0);
    }

    #[test]
    fn test_seed_samples_loads_two_threats() {
        let store = ThreatStore::with_capacity(50);
        store.seed_samples();
        assert_eq!(store.count(), 2);
        assert_eq!(store.count_by_severity(ThreatSeverity::Critical), 1);
    }

    #[test]
    fn test_seed_samples_respects_capacity() {
        let store = ThreatStore::with_capacity(1);
        store.seed_samples();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_event_store_counts_recent_events() {
        let store = EventStore::with_capacity(10);
        store.seed_samples();

        let mut stale = store.list().remove(0);
        stale.id = uuid::Uuid::new_v4();
        stale.timestamp = Utc::now() - Duration::hours(48);
        store.append(stale);

        assert_eq!(store.count(), 3);
        assert_eq!(store.count_last_24h(), 2);
    }

    #[test]
    fn test_vulnerability_store_counts_open_records() {
        let store = VulnerabilityStore::with_capacity(10);
        store.seed_samples();

        assert_eq!(store.count(), 2);
        assert_eq!(store.count_open(), 1);
        assert_eq!(store.count_by_severity(ThreatSeverity::Critical), 1);
    }

    #[test]
    fn test_dashboard_stores_seed_all_collections() {
        let stores = DashboardStores::with_capacity(50);
        stores.seed_samples();

        assert_eq!(stores.threats.count(), 2);
        assert_eq!(stores.events.count(), 2);
        assert_eq!(stores.vulnerabilities.count(), 2);
    }
}
