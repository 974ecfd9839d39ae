//! Notification kind enumeration.

use serde::{Deserialize, Serialize};

/// Kind of a notification. Closed enumeration: the store never grows a new
/// category at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
pub enum NotificationKind {
    /// A direct message was received.
    Message,
    /// System-level announcement.
    System,
    /// A rent receipt was issued.
    Receipt,
    /// A maintenance ticket changed state.
    Maintenance,
}

impl NotificationKind {
    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::System => "system",
            Self::Receipt => "receipt",
            Self::Maintenance => "maintenance",
        }
    }

    /// Coerce an arbitrary inbound string to the closest known kind.
    ///
    /// Producers must only use the four known values; anything else is
    /// altered to the nearest match (substring heuristics) and falls back to
    /// `System` rather than ever creating a new category.
    pub fn coerce(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "message" => Self::Message,
            "system" => Self::System,
            "receipt" => Self::Receipt,
            "maintenance" => Self::Maintenance,
            _ => {
                if normalized.contains("message") || normalized.contains("chat") {
                    Self::Message
                } else if normalized.contains("receipt") || normalized.contains("payment") {
                    Self::Receipt
                } else if normalized.contains("maintenance") || normalized.contains("repair") {
                    Self::Maintenance
                } else {
                    Self::System
                }
            }
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_values_round_trip() {
        for kind in [
            NotificationKind::Message,
            NotificationKind::System,
            NotificationKind::Receipt,
            NotificationKind::Maintenance,
        ] {
            assert_eq!(NotificationKind::coerce(kind.as_str()), kind);
        }
    }

    #[test]
    fn unknown_values_never_create_a_category() {
        assert_eq!(
            NotificationKind::coerce("new_message_v2"),
            NotificationKind::Message
        );
        assert_eq!(
            NotificationKind::coerce("rent_receipt"),
            NotificationKind::Receipt
        );
        assert_eq!(
            NotificationKind::coerce("MAINTENANCE_DONE"),
            NotificationKind::Maintenance
        );
        assert_eq!(
            NotificationKind::coerce("something-else"),
            NotificationKind::System
        );
        assert_eq!(NotificationKind::coerce(""), NotificationKind::System);
    }
}
