pub mod service;

pub use service::{MessageService, SendMessage};
