//! Repository error taxonomy.
//!
//! Repositories never let a raw driver error escape; every failure is folded
//! into one of these variants so the HTTP layer can map it deterministically.

use thiserror::Error;

/// Postgres error code for unique constraint violations.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Errors surfaced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A declared-unique field already holds this value.
    #[error("Duplicate value for unique field: {0}")]
    Duplicate(&'static str),

    /// The backing store is unreachable.
    #[error("Database unreachable: {0}")]
    Connectivity(String),

    /// The connection pool is saturated and the acquire wait timed out.
    #[error("Connection pool acquire timed out")]
    PoolTimeout,

    /// Any other driver error. The message is logged server-side only.
    #[error("Database error: {0}")]
    Database(String),
}

impl RepositoryError {
    /// Classifies an `sqlx` error, treating unique violations as duplicates
    /// of the given field.
    pub fn from_sqlx(err: sqlx::Error, unique_field: &'static str) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => RepositoryError::PoolTimeout,
            sqlx::Error::Io(e) => RepositoryError::Connectivity(e.to_string()),
            sqlx::Error::Tls(e) => RepositoryError::Connectivity(e.to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                    RepositoryError::Duplicate(unique_field)
                } else {
                    RepositoryError::Database(db_err.to_string())
                }
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::from_sqlx(err, "unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_classified() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::PoolTimeout));
    }

    #[test]
    fn test_io_error_is_connectivity() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = RepositoryError::from(sqlx::Error::Io(io));
        assert!(matches!(err, RepositoryError::Connectivity(_)));
    }

    #[test]
    fn test_row_not_found_is_database() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Database(_)));
    }

    #[test]
    fn test_display_does_not_leak_field_values() {
        let err = RepositoryError::Duplicate("email");
        assert_eq!(
            err.to_string(),
            "Duplicate value for unique field: email"
        );
    }
}
