//! Message repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use locahub_core::error::{AppError, ErrorKind};
use locahub_core::result::AppResult;
use locahub_entity::message::{Message, MessageWithCounterpart};

/// Parameters for inserting a message row.
#[derive(Debug, Clone)]
pub struct NewMessage {
    /// Sending user.
    pub sender_id: Uuid,
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Body text.
    pub body: String,
    /// Optional listing this message applies to.
    pub property_id: Option<Uuid>,
}

/// Repository for the message store.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a message row. Returns it with `is_read = false` and the
    /// database-assigned `created_at`.
    pub async fn create(&self, new: &NewMessage) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (id, sender_id, receiver_id, body, property_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(new.sender_id)
        .bind(new.receiver_id)
        .bind(&new.body)
        .bind(new.property_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }

    /// List all messages where the user is sender or receiver, newest first,
    /// with the counterpart's display info joined in.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<MessageWithCounterpart>> {
        sqlx::query_as::<_, MessageWithCounterpart>(
            "SELECT m.id, m.sender_id, m.receiver_id, m.body, m.property_id, \
                    m.is_read, m.created_at, \
                    u.name AS counterpart_name, u.email AS counterpart_email \
             FROM messages m \
             JOIN users u ON u.id = CASE WHEN m.sender_id = $1 THEN m.receiver_id ELSE m.sender_id END \
             WHERE m.sender_id = $1 OR m.receiver_id = $1 \
             ORDER BY m.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list messages", e))
    }

    /// Mark a batch of messages as read, scoped to the receiver: a sender can
    /// never mark their own sent message read through this path.
    ///
    /// Returns the number of rows touched.
    pub async fn mark_read(&self, message_ids: &[Uuid], user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = TRUE WHERE id = ANY($1) AND receiver_id = $2",
        )
        .bind(message_ids)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark messages read", e))?;
        Ok(result.rows_affected())
    }

    /// Delete a message if `user_id` is its sender or receiver.
    ///
    /// Returns `false` when nothing was deleted — non-owners get the same
    /// answer as a missing row, so existence is never confirmed to them.
    pub async fn delete(&self, message_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM messages WHERE id = $1 AND (sender_id = $2 OR receiver_id = $2)",
        )
        .bind(message_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete message", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Bulk-delete messages created before `cutoff`, regardless of read
    /// state. Idempotent: a second run with the same cutoff matches nothing.
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge old messages", e)
            })?;
        Ok(result.rows_affected())
    }
}
