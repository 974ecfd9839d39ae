//! Real-time hub — connection lifecycle and best-effort event emission.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use locahub_core::config::realtime::RealtimeConfig;

use crate::connection::handle::{ConnectionHandle, ConnectionId};
use crate::connection::pool::ConnectionPool;
use crate::room::RoomRegistry;
use crate::wire::{ClientEvent, ServerEvent};

/// Central real-time delivery hub.
///
/// Explicitly constructed at startup and dependency-injected (`Arc`) into
/// every component that emits — there is no global handle, so an emit before
/// setup is impossible by construction. Delivery is at-most-once: an emit to
/// an empty room is a silent no-op and nothing is queued or retried.
#[derive(Debug)]
pub struct RealtimeHub {
    /// All active connections.
    pool: ConnectionPool,
    /// Per-user room membership.
    rooms: RoomRegistry,
    /// Configuration.
    config: RealtimeConfig,
}

impl RealtimeHub {
    /// Creates a new hub.
    pub fn new(config: RealtimeConfig) -> Self {
        Self {
            pool: ConnectionPool::new(),
            rooms: RoomRegistry::new(),
            config,
        }
    }

    /// Registers a new connection.
    ///
    /// Returns the handle and the receiver half of its outbound queue. The
    /// connection belongs to no room until the client sends `join`.
    pub fn register(&self) -> (Arc<ConnectionHandle>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.config.outbound_buffer_size);
        let handle = Arc::new(ConnectionHandle::new(tx));
        self.pool.add(handle.clone());

        info!(conn_id = %handle.id, "WebSocket connection registered");
        (handle, rx)
    }

    /// Unregisters a connection and removes it from every room it joined.
    pub fn unregister(&self, conn_id: &ConnectionId) {
        if let Some(handle) = self.pool.remove(conn_id) {
            handle.mark_dead();
            self.rooms.leave_all(*conn_id);
            info!(conn_id = %conn_id, "WebSocket connection unregistered");
        }
    }

    /// Processes a raw inbound frame from a client.
    pub fn handle_inbound(&self, conn_id: &ConnectionId, raw: &str) {
        let Some(handle) = self.pool.get(conn_id) else {
            warn!(conn_id = %conn_id, "Frame from unknown connection");
            return;
        };

        let event: ClientEvent = match serde_json::from_str(raw) {
            Ok(event) => event,
            Err(e) => {
                self.send_error(&handle, "INVALID_EVENT", &format!("Failed to parse event: {e}"));
                return;
            }
        };

        match event {
            ClientEvent::Join { user_id } => self.handle_join(&handle, user_id),
        }
    }

    /// Adds a connection to the room named by the supplied identity.
    ///
    /// The identity is whatever the client sent; the protocol performs no
    /// authentication of the join. No acknowledgment is sent — the client
    /// relies on poll-based reconciliation, not on a join handshake.
    fn handle_join(&self, handle: &Arc<ConnectionHandle>, user_id: Uuid) {
        if self.rooms.member_count(user_id) >= self.config.max_connections_per_user {
            self.send_error(handle, "ROOM_FULL", "Too many connections for this user");
            return;
        }

        self.rooms.join(user_id, handle.id);
        debug!(conn_id = %handle.id, user_id = %user_id, "Connection joined room");
    }

    /// Emits an event to every connection in `user_id`'s room.
    ///
    /// Serializes once, then fans out. An empty room is a silent no-op; a
    /// full or closed per-connection buffer drops the event for that
    /// connection only. Returns the number of connections the event was
    /// queued to — callers treat any value, including zero, as success.
    pub fn emit_to_user(&self, user_id: Uuid, event: &ServerEvent) -> usize {
        let members = self.rooms.members(user_id);
        if members.is_empty() {
            return 0;
        }

        let payload = match serde_json::to_string(event) {
            Ok(p) => p,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to serialize outbound event");
                return 0;
            }
        };

        let mut delivered = 0;
        for conn_id in &members {
            if let Some(handle) = self.pool.get(conn_id) {
                if handle.send(payload.clone()) {
                    delivered += 1;
                }
            }
        }

        debug!(user_id = %user_id, delivered, "Event emitted to room");
        delivered
    }

    /// Whether any connection is currently joined to this user's room.
    pub fn is_user_connected(&self, user_id: Uuid) -> bool {
        self.rooms.member_count(user_id) > 0
    }

    /// Total number of active connections (joined or not).
    pub fn connection_count(&self) -> usize {
        self.pool.connection_count()
    }

    /// Number of users with at least one joined connection.
    pub fn online_user_count(&self) -> usize {
        self.rooms.room_count()
    }

    fn send_error(&self, handle: &Arc<ConnectionHandle>, code: &str, message: &str) {
        let event = ServerEvent::Error {
            code: code.to_string(),
            message: message.to_string(),
        };
        if let Ok(payload) = serde_json::to_string(&event) {
            handle.send(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use locahub_entity::message::Message;

    fn test_hub() -> RealtimeHub {
        RealtimeHub::new(RealtimeConfig::default())
    }

    fn join_frame(user_id: Uuid) -> String {
        format!(r#"{{"type":"join","user_id":"{user_id}"}}"#)
    }

    fn sample_message(receiver_id: Uuid) -> Message {
        Message {
            id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            receiver_id,
            body: "hello".to_string(),
            property_id: None,
            is_read: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn emit_to_empty_room_is_a_noop() {
        let hub = test_hub();
        let user = Uuid::new_v4();
        let event = ServerEvent::NewMessage {
            message: sample_message(user),
        };

        assert_eq!(hub.emit_to_user(user, &event), 0);
        assert!(!hub.is_user_connected(user));
    }

    #[tokio::test]
    async fn joined_connection_receives_emit() {
        let hub = test_hub();
        let user = Uuid::new_v4();
        let (handle, mut rx) = hub.register();

        hub.handle_inbound(&handle.id, &join_frame(user));
        assert!(hub.is_user_connected(user));

        let event = ServerEvent::NewMessage {
            message: sample_message(user),
        };
        assert_eq!(hub.emit_to_user(user, &event), 1);

        let raw = rx.recv().await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["type"], "new_message");
        assert_eq!(json["message"]["receiver_id"], user.to_string());
    }

    #[tokio::test]
    async fn room_isolation_holds() {
        let hub = test_hub();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();

        let (conn_a, mut rx_a) = hub.register();
        let (conn_b, mut rx_b) = hub.register();
        hub.handle_inbound(&conn_a.id, &join_frame(user_a));
        hub.handle_inbound(&conn_b.id, &join_frame(user_b));

        let event = ServerEvent::NewMessage {
            message: sample_message(user_a),
        };
        assert_eq!(hub.emit_to_user(user_a, &event), 1);

        assert!(rx_a.recv().await.is_some());
        // The other room must receive nothing.
        assert!(rx_b.try_recv().is_err());
    }

    #[tokio::test]
    async fn all_tabs_in_a_room_receive_the_emit() {
        let hub = test_hub();
        let user = Uuid::new_v4();

        let (tab_a, mut rx_a) = hub.register();
        let (tab_b, mut rx_b) = hub.register();
        hub.handle_inbound(&tab_a.id, &join_frame(user));
        hub.handle_inbound(&tab_b.id, &join_frame(user));

        let event = ServerEvent::NewMessage {
            message: sample_message(user),
        };
        assert_eq!(hub.emit_to_user(user, &event), 2);
        assert!(rx_a.recv().await.is_some());
        assert!(rx_b.recv().await.is_some());
    }

    #[tokio::test]
    async fn disconnect_removes_room_membership() {
        let hub = test_hub();
        let user = Uuid::new_v4();
        let (handle, _rx) = hub.register();

        hub.handle_inbound(&handle.id, &join_frame(user));
        assert!(hub.is_user_connected(user));

        hub.unregister(&handle.id);
        assert!(!hub.is_user_connected(user));
        assert_eq!(hub.connection_count(), 0);

        let event = ServerEvent::NewMessage {
            message: sample_message(user),
        };
        assert_eq!(hub.emit_to_user(user, &event), 0);
    }

    #[tokio::test]
    async fn unparseable_frame_gets_an_error_event() {
        let hub = test_hub();
        let (handle, mut rx) = hub.register();

        hub.handle_inbound(&handle.id, "not json");

        let raw = rx.recv().await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["code"], "INVALID_EVENT");
    }

    #[tokio::test]
    async fn rejoining_after_reconnect_restores_delivery() {
        let hub = test_hub();
        let user = Uuid::new_v4();

        let (first, _rx) = hub.register();
        hub.handle_inbound(&first.id, &join_frame(user));
        hub.unregister(&first.id);

        // Membership does not survive the disconnect.
        let event = ServerEvent::NewMessage {
            message: sample_message(user),
        };
        assert_eq!(hub.emit_to_user(user, &event), 0);

        let (second, mut rx) = hub.register();
        hub.handle_inbound(&second.id, &join_frame(user));
        assert_eq!(hub.emit_to_user(user, &event), 1);
        assert!(rx.recv().await.is_some());
    }
}
