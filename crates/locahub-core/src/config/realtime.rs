//! Real-time WebSocket delivery configuration.

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Per-connection outbound buffer size.
    #[serde(default = "default_outbound_buffer")]
    pub outbound_buffer_size: usize,
    /// Maximum WebSocket connections per user (tabs/devices).
    #[serde(default = "default_max_connections_per_user")]
    pub max_connections_per_user: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            outbound_buffer_size: default_outbound_buffer(),
            max_connections_per_user: default_max_connections_per_user(),
        }
    }
}

fn default_outbound_buffer() -> usize {
    64
}

fn default_max_connections_per_user() -> usize {
    8
}
