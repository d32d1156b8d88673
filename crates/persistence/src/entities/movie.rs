//! Movie entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the movies table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieEntity {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<MovieEntity> for domain::models::Movie {
    fn from(entity: MovieEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            director: entity.director,
            genre: entity.genre,
            release_year: entity.release_year,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }
}
