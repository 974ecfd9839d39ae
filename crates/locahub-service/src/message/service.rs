//! Message store, send path, and retention purge.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use locahub_core::error::AppError;
use locahub_core::result::AppResult;
use locahub_database::repositories::message::{MessageRepository, NewMessage};
use locahub_database::repositories::property::PropertyRepository;
use locahub_database::repositories::user::UserRepository;
use locahub_entity::message::{Message, MessageWithCounterpart};
use locahub_entity::notification::NotificationKind;
use locahub_entity::property::PropertySummary;
use locahub_realtime::hub::RealtimeHub;

use crate::context::RequestContext;
use crate::notification::service::NotificationService;
use crate::push;

/// Input for the send operation.
#[derive(Debug, Clone)]
pub struct SendMessage {
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Body text.
    pub body: String,
    /// Optional listing this message applies to.
    pub property_id: Option<Uuid>,
}

/// Point-to-point message delivery.
///
/// The send path runs in strict order: persist the message (fail loud), then
/// record the receiver's notification (fail silent), then attempt the live
/// push (fail silent). The sender sees success whenever step one succeeded.
#[derive(Debug, Clone)]
pub struct MessageService {
    /// Message repository.
    repo: Arc<MessageRepository>,
    /// Receiver existence check on send.
    user_repo: Arc<UserRepository>,
    /// Property lookup for application notifications.
    property_repo: Arc<PropertyRepository>,
    /// Notification producer.
    notifications: Arc<NotificationService>,
    /// Real-time delivery hub.
    hub: Arc<RealtimeHub>,
}

impl MessageService {
    /// Creates a new message service.
    pub fn new(
        repo: Arc<MessageRepository>,
        user_repo: Arc<UserRepository>,
        property_repo: Arc<PropertyRepository>,
        notifications: Arc<NotificationService>,
        hub: Arc<RealtimeHub>,
    ) -> Self {
        Self {
            repo,
            user_repo,
            property_repo,
            notifications,
            hub,
        }
    }

    /// Send a message: persist, notify, push.
    pub async fn send(&self, ctx: &RequestContext, input: SendMessage) -> AppResult<Message> {
        if input.body.trim().is_empty() {
            return Err(AppError::validation("Message body must not be empty"));
        }
        if self
            .user_repo
            .find_summary(input.receiver_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation("Unknown receiver"));
        }

        let message = self
            .repo
            .create(&NewMessage {
                sender_id: ctx.user_id,
                receiver_id: input.receiver_id,
                body: input.body,
                property_id: input.property_id,
            })
            .await?;

        // The message row is committed; nothing below may fail the send.
        let property = self.resolve_property(input.property_id).await;
        let (title, body, link) = notification_content(&ctx.name, property.as_ref());
        let notification = self
            .notifications
            .try_notify(
                Some(message.receiver_id),
                NotificationKind::Message,
                title,
                body,
                link,
            )
            .await;

        push::push_new_message(&self.hub, &message);
        if let Some(notification) = &notification {
            push::push_notification(&self.hub, notification);
        }

        Ok(message)
    }

    /// Resolve the listing a message applies to. Absence or lookup failure
    /// silently falls back to the generic notification.
    async fn resolve_property(&self, property_id: Option<Uuid>) -> Option<PropertySummary> {
        let property_id = property_id?;
        match self.property_repo.find_summary(property_id).await {
            Ok(found) => found,
            Err(e) => {
                debug!(property_id = %property_id, error = %e, "Property lookup failed, generic notification");
                None
            }
        }
    }

    /// List all messages where the user is a party, newest first, with
    /// counterpart display info.
    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<MessageWithCounterpart>> {
        self.repo.find_by_user(user_id).await
    }

    /// Mark a batch of messages read, scoped to the receiver. Returns the
    /// number of rows transitioned.
    pub async fn mark_read(&self, message_ids: &[Uuid], user_id: Uuid) -> AppResult<u64> {
        if message_ids.is_empty() {
            return Err(AppError::validation("message_ids must not be empty"));
        }
        self.repo.mark_read(message_ids, user_id).await
    }

    /// Delete a message the caller is a party to. Non-owners get not-found,
    /// never forbidden, so existence is not confirmed to them.
    pub async fn delete(&self, message_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let deleted = self.repo.delete(message_id, user_id).await?;
        if !deleted {
            return Err(AppError::not_found("Message not found"));
        }
        Ok(())
    }

    /// Purge messages older than the retention threshold. Age-based only —
    /// read state is not consulted. Idempotent within a day.
    pub async fn purge_older_than(&self, max_age_days: i64) -> AppResult<u64> {
        let cutoff = retention_cutoff(Utc::now(), max_age_days);
        let removed = self.repo.delete_older_than(cutoff).await?;
        info!(max_age_days, removed, "Message retention purge complete");
        Ok(removed)
    }
}

/// The purge deletes everything created strictly before this instant. The
/// threshold unit is days.
fn retention_cutoff(now: DateTime<Utc>, max_age_days: i64) -> DateTime<Utc> {
    now - Duration::days(max_age_days)
}

/// Title, body, and deep link for the receiver's notification.
///
/// A resolved listing turns the message into a property application with the
/// distinguished title; otherwise the generic new-message notification is
/// produced.
fn notification_content(
    sender_name: &str,
    property: Option<&PropertySummary>,
) -> (String, String, Option<String>) {
    match property {
        Some(property) => (
            "Nouvelle candidature".to_string(),
            format!(
                "{} a envoyé une candidature pour \"{}\"",
                sender_name, property.title
            ),
            Some(format!("/properties/{}", property.id)),
        ),
        None => (
            "Nouveau message".to_string(),
            format!("{} vous a envoyé un message", sender_name),
            Some("/messages".to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_notification_without_property() {
        let (title, body, link) = notification_content("Alice", None);
        assert_eq!(title, "Nouveau message");
        assert!(body.starts_with("Alice"));
        assert_eq!(link.as_deref(), Some("/messages"));
    }

    #[test]
    fn application_notification_with_property() {
        let property = PropertySummary {
            id: Uuid::new_v4(),
            title: "T2 centre-ville".to_string(),
            owner_id: Uuid::new_v4(),
        };
        let (title, body, link) = notification_content("Alice", Some(&property));
        assert_eq!(title, "Nouvelle candidature");
        assert!(body.contains("T2 centre-ville"));
        assert_eq!(link.as_deref(), Some(&*format!("/properties/{}", property.id)));
    }

    #[test]
    fn retention_cutoff_unit_is_days() {
        // Threshold 5: a message at T-6d falls before the cutoff and is
        // purged; a message at T-4d falls after it and survives.
        let now = Utc::now();
        let cutoff = retention_cutoff(now, 5);

        assert!(now - Duration::days(6) < cutoff);
        assert!(now - Duration::days(4) > cutoff);
        // Pin the unit exactly: five days, not weeks or months.
        assert_eq!(now - cutoff, Duration::days(5));
    }
}
