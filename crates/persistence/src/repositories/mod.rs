//! Repository implementations for database operations.

pub mod movie;
pub mod user;

pub use movie::{MovieInput, MovieRepository, MovieUpdate};
pub use user::{UserInput, UserRepository, UserStatsRow, UserUpdate};
