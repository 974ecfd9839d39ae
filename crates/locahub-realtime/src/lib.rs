//! # locahub-realtime
//!
//! Real-time delivery channel for LocaHub. Provides:
//!
//! - Per-user broadcast rooms over WebSocket connections
//! - The explicit client `join` protocol binding a connection to its room
//! - Best-effort, at-most-once event emission (no queuing, no retry, no ack)
//!
//! Room membership is process-local in-memory state: it is reset on restart
//! and clients must re-join after any disconnect. Durable state lives in the
//! notification and message stores, never here.

pub mod connection;
pub mod hub;
pub mod room;
pub mod wire;

pub use connection::handle::{ConnectionHandle, ConnectionId};
pub use hub::RealtimeHub;
pub use room::RoomRegistry;
pub use wire::{ClientEvent, ServerEvent};
