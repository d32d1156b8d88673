use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::RepositoryError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed")]
    Validation(Vec<ValidationDetail>),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

/// One failed field rule, machine-readable.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Validation(details) => {
                let message = if details.len() == 1 {
                    details[0].message.clone()
                } else {
                    format!("{} validation errors", details.len())
                };
                (
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    message,
                    Some(details),
                )
            }
            ApiError::Internal(msg) => {
                // Internal detail is logged, never echoed to the caller.
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(field) => {
                ApiError::Conflict(format!("A record with this {} already exists", field))
            }
            RepositoryError::Connectivity(msg) => ApiError::Internal(msg),
            RepositoryError::PoolTimeout => {
                ApiError::Internal("Connection pool acquire timed out".into())
            }
            RepositoryError::Database(msg) => ApiError::Internal(msg),
        }
    }
}

/// Flattens a validation error tree into dotted field paths, so failures on
/// nested structs (for example `location.lat`) and list elements
/// (`items[2].name`) all land in the `details` array.
fn collect_validation_details(
    prefix: &str,
    errors: &validator::ValidationErrors,
    details: &mut Vec<ValidationDetail>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for e in field_errors {
                    details.push(ValidationDetail {
                        field: path.clone(),
                        message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_details(&path, nested, details);
            }
            ValidationErrorsKind::List(elements) => {
                for (index, nested) in elements {
                    collect_validation_details(&format!("{}[{}]", path, index), nested, details);
                }
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details = Vec::new();
        collect_validation_details("", &errors, &mut details);
        ApiError::Validation(details)
    }
}
