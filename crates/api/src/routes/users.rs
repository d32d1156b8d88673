//! User registration endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{UserInput, UserRepository, UserUpdate};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::{ApiError, ValidationDetail};
use domain::models::user::{RegisterUserRequest, UpdateUserRequest, User, UserStats};

/// Response payload for mutations that do not return the record.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Hands an already-stored attachment back to the external file store for
/// deletion. Called whenever a request referencing an upload is rejected,
/// so no orphaned file is left behind. Upload storage itself is an external
/// collaborator; this process only knows the path.
fn discard_attachment(path: &Option<String>) {
    if let Some(path) = path {
        info!(path = %path, "Discarding orphaned profile picture");
    }
}

/// Register a new user.
///
/// POST /api/v1/users/register
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if let Err(errors) = request.validate() {
        discard_attachment(&request.profile_picture);
        return Err(errors.into());
    }

    let repo = UserRepository::new(state.pool.clone());

    // Friendly pre-check; the unique constraint still backstops races.
    match repo.find_by_email(&request.email).await {
        Ok(None) => {}
        Ok(Some(_)) => {
            discard_attachment(&request.profile_picture);
            return Err(ApiError::Conflict(
                "A user with this email already exists".to_string(),
            ));
        }
        Err(e) => {
            discard_attachment(&request.profile_picture);
            return Err(e.into());
        }
    }

    let entity = repo
        .create(UserInput {
            name: request.name,
            email: request.email,
            phone: request.phone,
            profile_picture: request.profile_picture.clone(),
        })
        .await
        .map_err(|e| {
            discard_attachment(&request.profile_picture);
            ApiError::from(e)
        })?;

    info!(user_id = entity.id, email = %entity.email, "User registered");

    Ok((StatusCode::CREATED, Json(User::from(entity))))
}

/// List all users, newest first.
///
/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?.into_iter().map(User::from).collect();
    Ok(Json(users))
}

/// Aggregate user counts.
///
/// GET /api/v1/users/stats
pub async fn get_user_stats(State(state): State<AppState>) -> Result<Json<UserStats>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let stats = repo.stats().await?;
    Ok(Json(UserStats {
        total: stats.total,
        confirmed: stats.confirmed,
        unconfirmed: stats.unconfirmed,
    }))
}

/// Get a single user.
///
/// GET /api/v1/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(User::from(user)))
}

/// Partially update a user. Omitted fields are left unchanged; the id and
/// creation timestamp are never touched. A body with no fields is rejected.
/// Changing the email to one held by another user fails with 409.
///
/// PUT /api/v1/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    if let Err(errors) = request.validate() {
        discard_attachment(&request.profile_picture);
        return Err(errors.into());
    }

    if request.is_empty() {
        return Err(ApiError::Validation(vec![ValidationDetail {
            field: "body".to_string(),
            message: "At least one field must be provided".to_string(),
        }]));
    }

    let repo = UserRepository::new(state.pool.clone());
    let updated = repo
        .update(
            id,
            UserUpdate {
                name: request.name,
                email: request.email,
                phone: request.phone,
                profile_picture: request.profile_picture.clone(),
            },
        )
        .await
        .map_err(|e| {
            discard_attachment(&request.profile_picture);
            ApiError::from(e)
        })?;

    if !updated {
        discard_attachment(&request.profile_picture);
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    info!(user_id = id, "User updated");

    Ok(Json(User::from(user)))
}

/// Delete a user.
///
/// DELETE /api/v1/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());

    // Fetch first so the stored attachment path can be handed to the file
    // store after the row is gone.
    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let deleted = repo.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    discard_attachment(&user.profile_picture);
    info!(user_id = id, "User deleted");

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

/// Mark a user's email as confirmed.
///
/// PUT /api/v1/users/:id/confirm-email
pub async fn confirm_email(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    if user.is_email_confirmed {
        return Ok(Json(MessageResponse {
            message: "Email already confirmed".to_string(),
        }));
    }

    let confirmed = repo.confirm_email(id).await?;
    if !confirmed {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    info!(user_id = id, "Email confirmed");

    Ok(Json(MessageResponse {
        message: "Email confirmed successfully".to_string(),
    }))
}
