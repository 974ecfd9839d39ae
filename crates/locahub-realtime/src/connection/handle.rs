//! Individual WebSocket connection handle.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Unique connection identifier.
pub type ConnectionId = Uuid;

/// A handle to a single WebSocket connection.
///
/// Holds the sender half of the outbound queue; the WebSocket task drains the
/// receiver half. A freshly registered connection belongs to no room until
/// the client sends its explicit `join` event.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection ID.
    pub id: ConnectionId,
    /// Sender for serialized outbound events.
    sender: mpsc::Sender<String>,
    /// When the connection was established.
    pub connected_at: DateTime<Utc>,
    /// Whether the connection is still alive.
    alive: AtomicBool,
}

impl ConnectionHandle {
    /// Create a new connection handle.
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            connected_at: Utc::now(),
            alive: AtomicBool::new(true),
        }
    }

    /// Push a serialized event onto this connection's outbound queue.
    ///
    /// Fire-and-forget: a full buffer drops the event, a closed peer marks
    /// the connection dead. Returns whether the event was queued.
    pub fn send(&self, payload: String) -> bool {
        if !self.is_alive() {
            return false;
        }
        match self.sender.try_send(payload) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(conn_id = %self.id, "Outbound buffer full, dropping event");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_dead();
                false
            }
        }
    }

    /// Check whether the connection is alive.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Mark the connection as dead.
    pub fn mark_dead(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
