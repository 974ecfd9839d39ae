//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use locahub_core::error::{AppError, ErrorKind};
use locahub_core::result::AppResult;
use locahub_entity::notification::{Notification, NotificationKind};

/// Parameters for inserting a notification row.
#[derive(Debug, Clone)]
pub struct NewNotification {
    /// Recipient user.
    pub user_id: Uuid,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Optional deep-link path.
    pub link: Option<String>,
}

/// Repository for the notification store.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification. This is the durability guarantee of the whole
    /// subsystem: callers must not proceed to the push step until this
    /// returns.
    pub async fn create(&self, new: &NewNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, user_id, kind, title, body, link) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.kind)
        .bind(&new.title)
        .bind(&new.body)
        .bind(&new.link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// List all notifications for a user, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark a notification as read. Ownership-scoped: the UPDATE only matches
    /// when the row belongs to `user_id`. Idempotent.
    ///
    /// Returns the number of rows touched (0 when not found or not owned).
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2")
                .bind(notification_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to mark read", e)
                })?;
        Ok(result.rows_affected())
    }

    /// Mark all currently-unread notifications as read, optionally filtered
    /// by kind. Idempotent: a second run matches zero rows.
    pub async fn mark_all_read(
        &self,
        user_id: Uuid,
        kind: Option<NotificationKind>,
    ) -> AppResult<u64> {
        let result = match kind {
            Some(kind) => {
                sqlx::query(
                    "UPDATE notifications SET is_read = TRUE \
                     WHERE user_id = $1 AND is_read = FALSE AND kind = $2",
                )
                .bind(user_id)
                .bind(kind)
                .execute(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "UPDATE notifications SET is_read = TRUE \
                     WHERE user_id = $1 AND is_read = FALSE",
                )
                .bind(user_id)
                .execute(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;

        Ok(result.rows_affected())
    }
}
