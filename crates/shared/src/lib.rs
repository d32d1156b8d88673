//! Shared utilities for the Labstack backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Field-level validation helpers consumed by the domain DTOs

pub mod validation;
