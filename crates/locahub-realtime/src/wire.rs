//! Wire format for events exchanged over the WebSocket connection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use locahub_entity::message::Message;
use locahub_entity::notification::Notification;

/// Events sent by the client to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Bind this connection to the room named by `user_id`.
    ///
    /// The identity is client-supplied and trusted as-is; the room is used
    /// for best-effort delivery only, never authorization.
    Join {
        /// Room to join, keyed by user identity.
        user_id: Uuid,
    },
}

/// Events sent by the server to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A message was delivered to this user; payload is the full record.
    NewMessage {
        /// The created message row.
        message: Message,
    },
    /// A notification was created for this user; payload is the full record.
    Notification {
        /// The created notification row.
        notification: Notification,
    },
    /// Protocol error (unparseable event, room at capacity).
    Error {
        /// Machine-readable error code.
        code: String,
        /// Human-readable description.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_event_parses() {
        let user_id = Uuid::new_v4();
        let raw = format!(r#"{{"type":"join","user_id":"{user_id}"}}"#);
        let event: ClientEvent = serde_json::from_str(&raw).unwrap();
        let ClientEvent::Join { user_id: parsed } = event;
        assert_eq!(parsed, user_id);
    }

    #[test]
    fn new_message_event_is_tagged() {
        let msg = Message {
            id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            receiver_id: Uuid::new_v4(),
            body: "hello".to_string(),
            property_id: None,
            is_read: false,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(ServerEvent::NewMessage { message: msg }).unwrap();
        assert_eq!(json["type"], "new_message");
        assert_eq!(json["message"]["body"], "hello");
        assert_eq!(json["message"]["is_read"], false);
    }
}
