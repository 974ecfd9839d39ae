//! Notification producer and read-state reconciliation.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use locahub_core::error::AppError;
use locahub_core::result::AppResult;
use locahub_database::repositories::notification::{NewNotification, NotificationRepository};
use locahub_entity::notification::{Notification, NotificationKind};

/// Single entry point for recording notifications and reconciling their read
/// state.
///
/// `create` is durable and fails loud; the live push is the caller's
/// separate, best-effort step (see [`crate::push`]). A missed push never
/// loses data because the row written here is the source of truth.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(repo: Arc<NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Durably record a notification. This must succeed or raise before the
    /// caller proceeds to any push attempt.
    pub async fn create(&self, new: NewNotification) -> AppResult<Notification> {
        self.repo.create(&new).await
    }

    /// Record a notification for a recipient that may have failed to
    /// resolve. A missing recipient (or a failed insert) is logged and
    /// skipped so the triggering business action still succeeds.
    pub async fn try_notify(
        &self,
        recipient: Option<Uuid>,
        kind: NotificationKind,
        title: String,
        body: String,
        link: Option<String>,
    ) -> Option<Notification> {
        let Some(user_id) = recipient else {
            warn!(%title, "Notification recipient could not be resolved, skipping");
            return None;
        };

        let new = NewNotification {
            user_id,
            kind,
            title,
            body,
            link,
        };
        match self.repo.create(&new).await {
            Ok(notification) => Some(notification),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to record notification");
                None
            }
        }
    }

    /// List all notifications for a user, newest first. Serves both the
    /// initial load and the reconciliation poll.
    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        self.repo.find_by_user(user_id).await
    }

    /// Unread count for the badge.
    pub async fn unread_count(&self, user_id: Uuid) -> AppResult<i64> {
        self.repo.count_unread(user_id).await
    }

    /// Mark one notification read. Idempotent; ownership-scoped — a row that
    /// is missing or belongs to someone else reports not-found.
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let touched = self.repo.mark_read(notification_id, user_id).await?;
        if touched == 0 {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Mark all currently-unread notifications read, optionally filtered by
    /// kind. Idempotent. Returns the number of rows transitioned.
    pub async fn mark_all_read(
        &self,
        user_id: Uuid,
        kind: Option<NotificationKind>,
    ) -> AppResult<u64> {
        self.repo.mark_all_read(user_id, kind).await
    }
}
