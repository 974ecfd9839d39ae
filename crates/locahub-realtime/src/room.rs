//! Room registry — per-user rooms and their member connections.

use std::collections::HashSet;

use dashmap::DashMap;
use uuid::Uuid;

use crate::connection::handle::ConnectionId;

/// Registry of per-user rooms.
///
/// A room is keyed by user identity and holds every connection that joined
/// it (multiple tabs or devices). The registry is the only owner of
/// connection-to-room mappings; other components address connections solely
/// by user id through the hub.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    /// User ID → member connections.
    rooms: DashMap<Uuid, HashSet<ConnectionId>>,
    /// Connection ID → joined rooms (reverse index for disconnect cleanup).
    memberships: DashMap<ConnectionId, HashSet<Uuid>>,
}

impl RoomRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            memberships: DashMap::new(),
        }
    }

    /// Adds a connection to a user's room.
    pub fn join(&self, user_id: Uuid, conn_id: ConnectionId) {
        self.rooms.entry(user_id).or_default().insert(conn_id);
        self.memberships.entry(conn_id).or_default().insert(user_id);
    }

    /// Removes a connection from every room it joined. Called implicitly on
    /// disconnect; no explicit leave event exists in the protocol.
    pub fn leave_all(&self, conn_id: ConnectionId) {
        let joined = self
            .memberships
            .remove(&conn_id)
            .map(|(_, rooms)| rooms)
            .unwrap_or_default();

        for user_id in &joined {
            if let Some(mut members) = self.rooms.get_mut(user_id) {
                members.remove(&conn_id);
            }
            // Atomic: a join landing between the removal above and this
            // check keeps the room alive.
            self.rooms.remove_if(user_id, |_, members| members.is_empty());
        }
    }

    /// Returns the member connections of a user's room (empty when nobody is
    /// joined).
    pub fn members(&self, user_id: Uuid) -> Vec<ConnectionId> {
        self.rooms
            .get(&user_id)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the member count of a user's room.
    pub fn member_count(&self, user_id: Uuid) -> usize {
        self.rooms.get(&user_id).map(|m| m.len()).unwrap_or(0)
    }

    /// Returns the number of non-empty rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_and_leave_all_cleans_up_empty_rooms() {
        let registry = RoomRegistry::new();
        let user = Uuid::new_v4();
        let conn = Uuid::new_v4();

        registry.join(user, conn);
        assert_eq!(registry.member_count(user), 1);
        assert_eq!(registry.room_count(), 1);

        registry.leave_all(conn);
        assert_eq!(registry.member_count(user), 0);
        assert_eq!(registry.room_count(), 0);
    }

    #[test]
    fn multiple_connections_share_a_room() {
        let registry = RoomRegistry::new();
        let user = Uuid::new_v4();
        let tab_a = Uuid::new_v4();
        let tab_b = Uuid::new_v4();

        registry.join(user, tab_a);
        registry.join(user, tab_b);
        assert_eq!(registry.member_count(user), 2);

        registry.leave_all(tab_a);
        assert_eq!(registry.member_count(user), 1);
        assert_eq!(registry.members(user), vec![tab_b]);
    }

    #[test]
    fn join_racing_a_disconnect_cleanup_is_never_evicted() {
        use std::sync::Arc;

        let registry = Arc::new(RoomRegistry::new());
        for _ in 0..100 {
            let user = Uuid::new_v4();
            let leaver = Uuid::new_v4();
            let joiner = Uuid::new_v4();
            registry.join(user, leaver);

            let cleanup = {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.leave_all(leaver))
            };
            registry.join(user, joiner);
            cleanup.join().unwrap();

            assert_eq!(registry.members(user), vec![joiner]);
            registry.leave_all(joiner);
        }
    }

    #[test]
    fn rooms_are_disjoint() {
        let registry = RoomRegistry::new();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        let conn = Uuid::new_v4();

        registry.join(user_a, conn);
        assert!(registry.members(user_b).is_empty());
    }
}
