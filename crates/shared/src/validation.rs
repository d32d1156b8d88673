//! Common validation utilities.

use validator::ValidationError;

/// Earliest accepted release year (first motion pictures).
const MIN_RELEASE_YEAR: i32 = 1888;

/// Latest accepted release year (allows announced future releases).
const MAX_RELEASE_YEAR: i32 = 2100;

/// Minimum number of digits in a phone number.
const MIN_PHONE_DIGITS: usize = 10;

/// Maximum number of digits in a phone number.
const MAX_PHONE_DIGITS: usize = 15;

/// Validates that a movie release year is within the accepted range.
pub fn validate_release_year(year: i32) -> Result<(), ValidationError> {
    if (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        Ok(())
    } else {
        let mut err = ValidationError::new("release_year_range");
        err.message = Some("Release year must be between 1888 and 2100".into());
        Err(err)
    }
}

/// Validates that a movie rating is within the 0-10 scale.
pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if (0.0..=10.0).contains(&rating) {
        Ok(())
    } else {
        let mut err = ValidationError::new("rating_range");
        err.message = Some("Rating must be between 0 and 10".into());
        Err(err)
    }
}

/// Validates a phone number: 10 to 15 digits, with an optional leading `+`
/// and common separators (spaces, dashes, parentheses) ignored.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.strip_prefix('+').unwrap_or(phone);
    let digits = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect::<String>();

    let all_digits = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());
    if all_digits && (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone number must be between 10 and 15 digits".into());
        Err(err)
    }
}

/// Validates that a CVSS score is within the 0-10 scale.
pub fn validate_cvss_score(score: f64) -> Result<(), ValidationError> {
    if (0.0..=10.0).contains(&score) {
        Ok(())
    } else {
        let mut err = ValidationError::new("cvss_score_range");
        err.message = Some("CVSS score must be between 0 and 10".into());
        Err(err)
    }
}

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}
