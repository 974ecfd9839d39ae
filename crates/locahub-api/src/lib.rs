//! HTTP surface of LocaHub: REST routes for notifications and messages,
//! the WebSocket upgrade endpoint, authentication extraction, and the
//! response envelope shared by every handler.

pub mod auth;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
