//! Movie catalog domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a movie record in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub release_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a movie.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Director must be between 1 and 255 characters"
    ))]
    pub director: String,

    #[validate(length(min = 1, max = 100, message = "Genre must be between 1 and 100 characters"))]
    pub genre: String,

    #[validate(custom(function = "shared::validation::validate_release_year"))]
    pub release_year: i32,

    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: Option<f64>,
}

/// Request payload for updating a movie. All fields are optional;
/// omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Director must be between 1 and 255 characters"
    ))]
    pub director: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Genre must be between 1 and 100 characters"))]
    pub genre: Option<String>,

    #[validate(custom(function = "shared::validation::validate_release_year"))]
    pub release_year: Option<i32>,

    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: Option<f64>,
}

impl UpdateMovieRequest {
    /// Returns true when the request carries no field to change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.genre.is_none()
            && self.release_year.is_none()
            && self.rating.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateMovieRequest {
        CreateMovieRequest {
            title: "Inception".to_string(),
            director: "Nolan".to_string(),
            genre: "Sci-Fi".to_string(),
            release_year: 2010,
            rating: Some(8.8),
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_empty_title_rejected() {
        let mut request = valid_request();
        request.title = String::new();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_request_rating_out_of_range() {
        let mut request = valid_request();
        request.rating = Some(11.0);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn test_create_request_rating_optional() {
        let mut request = valid_request();
        request.rating = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_release_year_out_of_range() {
        let mut request = valid_request();
        request.release_year = 1500;
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("release_year"));
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(UpdateMovieRequest::default().is_empty());

        let request = UpdateMovieRequest {
            title: Some("Memento".to_string()),
            ..Default::default()
        };
        assert!(!request.is_empty());
    }

    #[test]
    fn test_update_request_partial_validation() {
        let request = UpdateMovieRequest {
            genre: Some(String::new()),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("genre"));
    }

    #[test]
    fn test_movie_rating_omitted_when_none() {
        let movie = Movie {
            id: 1,
            title: "The Godfather".to_string(),
            director: "Francis Ford Coppola".to_string(),
            genre: "Crime".to_string(),
            release_year: 1972,
            rating: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert!(json.get("rating").is_none());
        assert_eq!(json["release_year"], 1972);
    }
}
