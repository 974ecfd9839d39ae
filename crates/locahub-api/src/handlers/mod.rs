pub mod health;
pub mod message;
pub mod notification;
pub mod ws;
