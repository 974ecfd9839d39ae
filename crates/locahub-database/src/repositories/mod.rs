//! Repository implementations.
//!
//! Each repository owns the SQL for one table. All mutation is single-row or
//! filtered-predicate statements; the ownership checks required by the API
//! live in the WHERE clauses here, not in application code.

pub mod message;
pub mod notification;
pub mod property;
pub mod user;

pub use message::MessageRepository;
pub use notification::NotificationRepository;
pub use property::PropertyRepository;
pub use user::UserRepository;
