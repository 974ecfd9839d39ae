//! Best-effort push helpers.
//!
//! Every code path that has just persisted a message or notification funnels
//! its live-delivery attempt through here. A push can only happen *after*
//! the durable write, and nothing in this module can fail the caller: a
//! missed push is logged and the user discovers the record on their next
//! poll.

use tracing::debug;
use uuid::Uuid;

use locahub_entity::message::Message;
use locahub_entity::notification::Notification;
use locahub_realtime::hub::RealtimeHub;
use locahub_realtime::wire::ServerEvent;

/// Push a freshly persisted message to the receiver's room.
pub fn push_new_message(hub: &RealtimeHub, message: &Message) {
    let receiver = message.receiver_id;
    let delivered = hub.emit_to_user(
        receiver,
        &ServerEvent::NewMessage {
            message: message.clone(),
        },
    );
    log_outcome("new_message", receiver, delivered);
}

/// Push a freshly persisted notification to its recipient's room.
pub fn push_notification(hub: &RealtimeHub, notification: &Notification) {
    let recipient = notification.user_id;
    let delivered = hub.emit_to_user(
        recipient,
        &ServerEvent::Notification {
            notification: notification.clone(),
        },
    );
    log_outcome("notification", recipient, delivered);
}

fn log_outcome(event: &str, user_id: Uuid, delivered: usize) {
    if delivered == 0 {
        debug!(event, user_id = %user_id, "No live connection, push skipped");
    } else {
        debug!(event, user_id = %user_id, delivered, "Live push delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use locahub_core::config::realtime::RealtimeConfig;
    use locahub_entity::notification::NotificationKind;

    #[tokio::test]
    async fn push_to_offline_user_is_silent() {
        let hub = RealtimeHub::new(RealtimeConfig::default());
        let message = Message {
            id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            receiver_id: Uuid::new_v4(),
            body: "hello".to_string(),
            property_id: None,
            is_read: false,
            created_at: Utc::now(),
        };

        // Nobody joined; must complete without error.
        push_new_message(&hub, &message);

        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: NotificationKind::Message,
            title: "Nouveau message".to_string(),
            body: "hello".to_string(),
            link: None,
            is_read: false,
            created_at: Utc::now(),
        };
        push_notification(&hub, &notification);
    }
}
