//! User lookup repository.

use sqlx::PgPool;
use uuid::Uuid;

use locahub_core::error::{AppError, ErrorKind};
use locahub_core::result::AppResult;
use locahub_entity::user::UserSummary;

/// Read-only repository over the users table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve display info for a user.
    pub async fn find_summary(&self, user_id: Uuid) -> AppResult<Option<UserSummary>> {
        sqlx::query_as::<_, UserSummary>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }
}
