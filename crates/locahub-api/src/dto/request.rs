use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /messages`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub receiver_id: Uuid,
    #[validate(length(min = 1, message = "message body must not be empty"))]
    pub message: String,
    pub property_id: Option<Uuid>,
}

/// Body of `PATCH /messages/read`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarkMessagesReadRequest {
    #[validate(length(min = 1, message = "messageIds must not be empty"))]
    pub message_ids: Vec<Uuid>,
}

/// Body of `POST /notifications`. The kind arrives as free text and is
/// coerced to a known variant server-side.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub kind: Option<String>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    pub link: Option<String>,
}

/// Query string of `PATCH /notifications/read-all`.
#[derive(Debug, Default, Deserialize)]
pub struct MarkAllReadQuery {
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_rejects_empty_body() {
        let req = SendMessageRequest {
            receiver_id: Uuid::new_v4(),
            message: String::new(),
            property_id: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn mark_read_requires_ids() {
        let req = MarkMessagesReadRequest { message_ids: vec![] };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_notification_parses_camel_case() {
        let req: CreateNotificationRequest = serde_json::from_value(serde_json::json!({
            "userId": "4b4255f3-9d46-4b74-9e4c-b9f3a63d8b11",
            "title": "Nouveau message",
            "message": "Alice vous a envoyé un message",
        }))
        .unwrap();
        assert!(req.kind.is_none());
        assert!(req.validate().is_ok());
    }
}
