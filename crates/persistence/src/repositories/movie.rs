//! Movie repository for database operations.

use sqlx::PgPool;

use crate::entities::MovieEntity;
use crate::error::RepositoryError;
use crate::metrics::QueryTimer;

/// Fields required to insert a movie.
#[derive(Debug, Clone)]
pub struct MovieInput {
    pub title: String,
    pub director: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: Option<f64>,
}

/// Partial update for a movie. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<f64>,
}

/// Repository for movie-related database operations.
#[derive(Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    /// Creates a new MovieRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a movie and return the stored row with its assigned id.
    pub async fn create(&self, input: MovieInput) -> Result<MovieEntity, RepositoryError> {
        let timer = QueryTimer::new("movie_create");
        let result = sqlx::query_as::<_, MovieEntity>(
            r#"
            INSERT INTO movies (title, director, genre, release_year, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, director, genre, release_year, rating, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.director)
        .bind(&input.genre)
        .bind(input.release_year)
        .bind(input.rating)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(RepositoryError::from)
    }

    /// Get a movie by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<MovieEntity>, RepositoryError> {
        let timer = QueryTimer::new("movie_find_by_id");
        let result = sqlx::query_as::<_, MovieEntity>(
            r#"
            SELECT id, title, director, genre, release_year, rating, created_at
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(RepositoryError::from)
    }

    /// Get all movies, newest first.
    pub async fn find_all(&self) -> Result<Vec<MovieEntity>, RepositoryError> {
        let timer = QueryTimer::new("movie_find_all");
        let result = sqlx::query_as::<_, MovieEntity>(
            r#"
            SELECT id, title, director, genre, release_year, rating, created_at
            FROM movies
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(RepositoryError::from)
    }

    /// Apply a partial update. Returns false when the id does not exist.
    /// The id and creation timestamp are never touched.
    pub async fn update(&self, id: i64, update: MovieUpdate) -> Result<bool, RepositoryError> {
        let timer = QueryTimer::new("movie_update");
        let result = sqlx::query(
            r#"
            UPDATE movies SET
                title = COALESCE($2, title),
                director = COALESCE($3, director),
                genre = COALESCE($4, genre),
                release_year = COALESCE($5, release_year),
                rating = COALESCE($6, rating)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.director)
        .bind(update.genre)
        .bind(update.release_year)
        .bind(update.rating)
        .execute(&self.pool)
        .await;
        timer.record();
        let result = result.map_err(RepositoryError::from)?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a movie. Returns false when the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let timer = QueryTimer::new("movie_delete");
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        let result = result.map_err(RepositoryError::from)?;
        Ok(result.rows_affected() > 0)
    }
}
