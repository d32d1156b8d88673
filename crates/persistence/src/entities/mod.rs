//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod movie;
pub mod user;

pub use movie::MovieEntity;
pub use user::UserEntity;
