//! # locahub-service
//!
//! Business services for LocaHub. The send and create paths enforce the
//! subsystem's one hard rule: persistence is the correctness boundary (fail
//! loud), live delivery is an optimization (fail silent, logged).

pub mod context;
pub mod message;
pub mod notification;
pub mod push;

pub use context::RequestContext;
pub use message::service::MessageService;
pub use notification::service::NotificationService;
