//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub profile_picture: Option<String>,
    pub is_email_confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            profile_picture: entity.profile_picture,
            is_email_confirmed: entity.is_email_confirmed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
