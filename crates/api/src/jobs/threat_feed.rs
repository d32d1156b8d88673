//! Synthetic threat feed background job.
//!
//! Simulation stand-in for a real ingestion pipeline: on every tick one
//! fabricated threat is appended to the in-memory store, until the store's
//! capacity ceiling is reached. Nothing is ever evicted.

use std::sync::Arc;
use tracing::{debug, info};

use super::scheduler::{Job, JobFrequency};
use domain::models::Threat;
use persistence::ThreatStore;

/// Job that periodically emits one synthetic threat.
pub struct ThreatFeedJob {
    store: Arc<ThreatStore>,
    interval_secs: u64,
}

impl ThreatFeedJob {
    /// Create a new feed job over the shared store.
    pub fn new(store: Arc<ThreatStore>, interval_secs: u64) -> Self {
        Self {
            store,
            interval_secs,
        }
    }

    /// One emission: append a synthetic threat unless the store is full.
    /// Returns true when a record was appended.
    fn emit(&self) -> bool {
        let threat = Threat::synthetic();
        let appended = self.store.append(threat);
        if appended {
            debug!(
                count = self.store.count(),
                capacity = self.store.capacity(),
                "Synthetic threat appended"
            );
        } else {
            info!(
                capacity = self.store.capacity(),
                "Threat store at capacity, skipping emission"
            );
        }
        appended
    }
}

#[async_trait::async_trait]
impl Job for ThreatFeedJob {
    fn name(&self) -> &'static str {
        "threat_feed"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Seconds(self.interval_secs)
    }

    async fn execute(&self) -> Result<(), String> {
        self.emit();
        Ok(())
    }
}
