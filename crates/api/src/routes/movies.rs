//! Movie catalog endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{MovieInput, MovieRepository, MovieUpdate};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::{ApiError, ValidationDetail};
use domain::models::movie::{CreateMovieRequest, Movie, UpdateMovieRequest};

/// Response payload for mutations that do not return the record.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List all movies, newest first.
///
/// GET /api/v1/movies
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let repo = MovieRepository::new(state.pool.clone());
    let movies = repo
        .find_all()
        .await?
        .into_iter()
        .map(Movie::from)
        .collect();
    Ok(Json(movies))
}

/// Get a single movie.
///
/// GET /api/v1/movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, ApiError> {
    let repo = MovieRepository::new(state.pool.clone());
    let movie = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;
    Ok(Json(Movie::from(movie)))
}

/// Create a movie.
///
/// POST /api/v1/movies
pub async fn create_movie(
    State(state): State<AppState>,
    Json(request): Json<CreateMovieRequest>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    request.validate()?;

    let repo = MovieRepository::new(state.pool.clone());
    let entity = repo
        .create(MovieInput {
            title: request.title,
            director: request.director,
            genre: request.genre,
            release_year: request.release_year,
            rating: request.rating,
        })
        .await?;

    info!(movie_id = entity.id, title = %entity.title, "Movie created");

    Ok((StatusCode::CREATED, Json(Movie::from(entity))))
}

/// Partially update a movie. Omitted fields are left unchanged; the id and
/// creation timestamp are never touched. A body with no fields is rejected.
///
/// PUT /api/v1/movies/:id
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateMovieRequest>,
) -> Result<Json<Movie>, ApiError> {
    request.validate()?;

    if request.is_empty() {
        return Err(ApiError::Validation(vec![ValidationDetail {
            field: "body".to_string(),
            message: "At least one field must be provided".to_string(),
        }]));
    }

    let repo = MovieRepository::new(state.pool.clone());
    let updated = repo
        .update(
            id,
            MovieUpdate {
                title: request.title,
                director: request.director,
                genre: request.genre,
                release_year: request.release_year,
                rating: request.rating,
            },
        )
        .await?;

    if !updated {
        return Err(ApiError::NotFound("Movie not found".to_string()));
    }

    let movie = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    info!(movie_id = id, "Movie updated");

    Ok(Json(Movie::from(movie)))
}

/// Delete a movie.
///
/// DELETE /api/v1/movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = MovieRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Movie not found".to_string()));
    }

    info!(movie_id = id, "Movie deleted");

    Ok(Json(MessageResponse {
        message: "Movie deleted successfully".to_string(),
    }))
}
