//! HTTP route handlers.

pub mod dashboard;
pub mod events;
pub mod health;
pub mod movies;
pub mod threats;
pub mod users;
pub mod vulnerabilities;
