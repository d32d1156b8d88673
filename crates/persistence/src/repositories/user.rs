//! User repository for database operations.

use sqlx::{PgPool, Row};

use crate::entities::UserEntity;
use crate::error::RepositoryError;
use crate::metrics::QueryTimer;

/// Fields required to insert a user.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub profile_picture: Option<String>,
}

/// Partial update for a user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
}

/// Aggregate counts over the users table.
///
/// Computed as two scalar queries with no transactional snapshot between
/// them; a write landing in the gap skews the split until the next read.
#[derive(Debug, Clone, Copy)]
pub struct UserStatsRow {
    pub total: i64,
    pub confirmed: i64,
    pub unconfirmed: i64,
}

/// Repository for user-related database operations.
///
/// The email column is declared UNIQUE; violations surface as
/// [`RepositoryError::Duplicate`].
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the stored row with its assigned id.
    pub async fn create(&self, input: UserInput) -> Result<UserEntity, RepositoryError> {
        let timer = QueryTimer::new("user_create");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (name, email, phone, profile_picture)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, profile_picture, is_email_confirmed,
                      created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.profile_picture)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(|e| RepositoryError::from_sqlx(e, "email"))
    }

    /// Get a user by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, RepositoryError> {
        let timer = QueryTimer::new("user_find_by_id");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, phone, profile_picture, is_email_confirmed,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(RepositoryError::from)
    }

    /// Get a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, RepositoryError> {
        let timer = QueryTimer::new("user_find_by_email");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, phone, profile_picture, is_email_confirmed,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(RepositoryError::from)
    }

    /// Get all users, newest first.
    pub async fn find_all(&self) -> Result<Vec<UserEntity>, RepositoryError> {
        let timer = QueryTimer::new("user_find_all");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, phone, profile_picture, is_email_confirmed,
                   created_at, updated_at
            FROM users
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(RepositoryError::from)
    }

    /// Apply a partial update and bump `updated_at`. Returns false when the
    /// id does not exist. Changing the email to one held by another row
    /// fails with [`RepositoryError::Duplicate`].
    pub async fn update(&self, id: i64, update: UserUpdate) -> Result<bool, RepositoryError> {
        let timer = QueryTimer::new("user_update");
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                profile_picture = COALESCE($5, profile_picture),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.email)
        .bind(update.phone)
        .bind(update.profile_picture)
        .execute(&self.pool)
        .await;
        timer.record();
        let result = result.map_err(|e| RepositoryError::from_sqlx(e, "email"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a user. Returns false when the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let timer = QueryTimer::new("user_delete");
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        let result = result.map_err(RepositoryError::from)?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a user's email as confirmed. Returns false when the id does not
    /// exist.
    pub async fn confirm_email(&self, id: i64) -> Result<bool, RepositoryError> {
        let timer = QueryTimer::new("user_confirm_email");
        let result = sqlx::query(
            r#"
            UPDATE users SET is_email_confirmed = TRUE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.record();
        let result = result.map_err(RepositoryError::from)?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate user counts: total, confirmed, and the remainder.
    pub async fn stats(&self) -> Result<UserStatsRow, RepositoryError> {
        let timer = QueryTimer::new("user_stats");

        let total: i64 = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|row| row.get("count"))
            .map_err(RepositoryError::from)?;

        let confirmed: i64 =
            sqlx::query("SELECT COUNT(*) AS count FROM users WHERE is_email_confirmed = TRUE")
                .fetch_one(&self.pool)
                .await
                .map(|row| row.get("count"))
                .map_err(RepositoryError::from)?;

        timer.record();
        Ok(UserStatsRow {
            total,
            confirmed,
            unconfirmed: total - confirmed,
        })
    }
}
