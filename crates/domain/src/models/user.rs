//! Registered user domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static::lazy_static! {
    static ref NAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-zA-Z\s]+$").unwrap();
}

/// Represents a registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub is_email_confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for user registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"),
        regex(path = "*NAME_REGEX", message = "Name can only contain letters and spaces")
    )]
    pub name: String,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    /// Path to an already-stored profile picture. The file itself is handled
    /// by an external storage component.
    #[validate(length(max = 512, message = "Profile picture path too long"))]
    pub profile_picture: Option<String>,
}

/// Request payload for updating a user. All fields are optional;
/// omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"),
        regex(path = "*NAME_REGEX", message = "Name can only contain letters and spaces")
    )]
    pub name: Option<String>,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: Option<String>,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: Option<String>,

    #[validate(length(max = 512, message = "Profile picture path too long"))]
    pub profile_picture: Option<String>,
}

impl UpdateUserRequest {
    /// Returns true when the request carries no field to change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.profile_picture.is_none()
    }
}

/// Aggregate user counts.
///
/// `total == confirmed + unconfirmed`; the counts come from two separate
/// queries, so a concurrent write between them may skew the split briefly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub total: i64,
    pub confirmed: i64,
    pub unconfirmed: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterUserRequest {
        RegisterUserRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 555 123 4567".to_string(),
            profile_picture: None,
        }
    }

    #[test]
    fn test_register_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_name_with_digits_rejected() {
        let mut request = valid_request();
        request.name = "Ada 1337".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_register_request_name_too_short() {
        let mut request = valid_request();
        request.name = "A".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_register_request_invalid_email() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_request_invalid_phone() {
        let mut request = valid_request();
        request.phone = "12345".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(UpdateUserRequest::default().is_empty());

        let request = UpdateUserRequest {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        assert!(!request.is_empty());
    }

    #[test]
    fn test_update_request_partial_validation() {
        let request = UpdateUserRequest {
            phone: Some("abc".to_string()),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_user_profile_picture_omitted_when_none() {
        let user = User {
            id: 7,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234567".to_string(),
            profile_picture: None,
            is_email_confirmed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("profile_picture").is_none());
        assert_eq!(json["is_email_confirmed"], false);
    }
}
