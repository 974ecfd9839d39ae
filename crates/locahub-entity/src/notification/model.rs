//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A notification record for a user.
///
/// Created once by the producer, mutated only by the unread→read transition,
/// never deleted. Rows are the durable source of truth behind the best-effort
/// live push.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Optional deep-link path for client navigation.
    pub link: Option<String>,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// When the notification was created (immutable).
    pub created_at: DateTime<Utc>,
}
