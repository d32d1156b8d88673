//! Background job scheduler and job implementations.

mod pool_metrics;
mod scheduler;
mod threat_feed;

pub use pool_metrics::PoolMetricsJob;
pub use scheduler::{Job, JobFrequency, JobScheduler};
pub use threat_feed::ThreatFeedJob;
