//! Property lookup repository.

use sqlx::PgPool;
use uuid::Uuid;

use locahub_core::error::{AppError, ErrorKind};
use locahub_core::result::AppResult;
use locahub_entity::property::PropertySummary;

/// Read-only repository over the properties table.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a listing summary for application notifications.
    pub async fn find_summary(&self, property_id: Uuid) -> AppResult<Option<PropertySummary>> {
        sqlx::query_as::<_, PropertySummary>(
            "SELECT id, title, owner_id FROM properties WHERE id = $1",
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find property", e))
    }
}
