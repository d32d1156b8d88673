//! Domain layer for the Labstack backend.
//!
//! This crate contains:
//! - Domain models (Movie, User, Threat)
//! - Request/response DTOs with validation rules

pub mod models;
