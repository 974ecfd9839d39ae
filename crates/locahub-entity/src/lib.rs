//! # locahub-entity
//!
//! Domain entity models for LocaHub: notification and message rows plus the
//! lightweight user/property summaries resolved from external collaborators.

pub mod message;
pub mod notification;
pub mod property;
pub mod user;

pub use message::{Message, MessageWithCounterpart};
pub use notification::{Notification, NotificationKind};
pub use property::PropertySummary;
pub use user::UserSummary;
