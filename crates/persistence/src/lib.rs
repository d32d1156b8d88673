//! Persistence layer for the Labstack backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The in-memory stores backing the simulated dashboard

pub mod db;
pub mod entities;
pub mod error;
pub mod memory_store;
pub mod metrics;
pub mod repositories;

pub use error::RepositoryError;
pub use memory_store::{DashboardStores, EventStore, ThreatStore, VulnerabilityStore};
