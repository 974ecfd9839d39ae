//! Direct message entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A point-to-point message between two users.
///
/// When `property_id` is set the message is a property application; the send
/// path then produces a distinguished notification for the receiver.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sending user.
    pub sender_id: Uuid,
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Body text.
    pub body: String,
    /// Optional listing this message applies to.
    pub property_id: Option<Uuid>,
    /// Whether the receiver has read this message.
    pub is_read: bool,
    /// When the message was created (immutable).
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Whether `user_id` is a party to this message.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }
}

/// A message joined with the counterpart's display info for list views.
///
/// "Counterpart" is the other party from the perspective of the listing user:
/// the sender when the user is the receiver, and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MessageWithCounterpart {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sending user.
    pub sender_id: Uuid,
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Body text.
    pub body: String,
    /// Optional listing this message applies to.
    pub property_id: Option<Uuid>,
    /// Whether the receiver has read this message.
    pub is_read: bool,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
    /// Counterpart display name.
    pub counterpart_name: String,
    /// Counterpart email.
    pub counterpart_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn involves_matches_both_parties_only() {
        let sender = Uuid::new_v4();
        let receiver = Uuid::new_v4();
        let msg = Message {
            id: Uuid::new_v4(),
            sender_id: sender,
            receiver_id: receiver,
            body: "hello".to_string(),
            property_id: None,
            is_read: false,
            created_at: Utc::now(),
        };

        assert!(msg.involves(sender));
        assert!(msg.involves(receiver));
        assert!(!msg.involves(Uuid::new_v4()));
    }
}
