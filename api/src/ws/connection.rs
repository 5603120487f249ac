//! WebSocket connection state.
//!
//! Provides per-connection identity and the outbound send path.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tracing::error;

use stroomp_sdk::ws::EventMessage;

/// Capacity of each connection's outbound buffer.
///
/// When a consumer falls this far behind, further registry deliveries to it
/// are dropped rather than buffered without bound.
pub const OUTBOUND_BUFFER: usize = 64;

/// Global connection ID counter.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generates a unique connection ID.
#[must_use]
pub fn next_connection_id() -> u64 {
    CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// One live WebSocket connection.
///
/// A connection belongs to exactly one stream group, resolved at handshake
/// time and fixed for its lifetime.
#[derive(Debug)]
pub struct Connection {
    /// Unique connection ID.
    id: u64,

    /// The stream group this connection joined.
    stream_id: String,

    /// Sender for outgoing serialized messages.
    sender: mpsc::Sender<String>,
}

impl Connection {
    /// Creates a new connection bound to a stream group.
    #[must_use]
    pub fn new(stream_id: impl Into<String>, sender: mpsc::Sender<String>) -> Self {
        Self {
            id: next_connection_id(),
            stream_id: stream_id.into(),
            sender,
        }
    }

    /// Returns the connection ID.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the stream group this connection joined.
    #[must_use]
    pub fn stream_id(&self) -> &str {
        &self.stream_id
    }

    /// Sends a message directly to this connection.
    ///
    /// Returns true if the message was queued successfully.
    pub async fn send(&self, message: &EventMessage) -> bool {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to serialize {} message: {}", message.event_type(), e);
                return false;
            }
        };

        self.sender.send(json).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_connection_id() {
        let id1 = next_connection_id();
        let id2 = next_connection_id();
        assert!(id2 > id1);
    }

    #[tokio::test]
    async fn test_connection_new() {
        let (tx, _rx) = mpsc::channel(OUTBOUND_BUFFER);
        let conn = Connection::new("s1", tx);
        assert!(conn.id() > 0);
        assert_eq!(conn.stream_id(), "s1");
    }

    #[tokio::test]
    async fn test_connection_send() {
        let (tx, mut rx) = mpsc::channel(OUTBOUND_BUFFER);
        let conn = Connection::new("s1", tx);

        let sent = conn.send(&EventMessage::welcome("s1")).await;
        assert!(sent);

        let json = rx.recv().await.expect("message");
        assert!(json.contains("\"type\":\"welcome\""));
    }

    #[tokio::test]
    async fn test_connection_send_after_receiver_dropped() {
        let (tx, rx) = mpsc::channel(OUTBOUND_BUFFER);
        let conn = Connection::new("s1", tx);
        drop(rx);

        let sent = conn.send(&EventMessage::welcome("s1")).await;
        assert!(!sent);
    }
}
