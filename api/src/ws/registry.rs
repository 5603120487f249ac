//! Stream group registry for WebSocket connections.
//!
//! Tracks which connections are subscribed to which stream and delivers
//! targeted and platform-wide notifications.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use stroomp_sdk::ws::EventMessage;

use super::metrics::WsMetrics;

/// The stream group connections fall back to when no `streamId` is given.
pub const GLOBAL_STREAM: &str = "global";

/// Registry of stream groups and their member connections.
///
/// Groups are created lazily on first join and removed when their last
/// member leaves. Each member is addressed by connection id and reached
/// through its bounded outbound channel; delivery never awaits a slow
/// consumer.
#[derive(Debug)]
pub struct StreamRegistry {
    /// Map from stream id to member senders, keyed by connection id.
    groups: RwLock<HashMap<String, HashMap<u64, mpsc::Sender<String>>>>,

    /// Metrics.
    metrics: Arc<WsMetrics>,
}

impl Default for StreamRegistry {
    fn default() -> Self {
        Self::new(Arc::new(WsMetrics::new()))
    }
}

impl StreamRegistry {
    /// Creates a new registry reporting into the given metrics.
    #[must_use]
    pub fn new(metrics: Arc<WsMetrics>) -> Self {
        Self {
            groups: RwLock::new(HashMap::new()),
            metrics,
        }
    }

    /// Adds a connection to a stream group, creating the group if absent.
    pub async fn join(&self, stream_id: &str, connection_id: u64, sender: mpsc::Sender<String>) {
        let mut groups = self.groups.write().await;
        groups
            .entry(stream_id.to_string())
            .or_default()
            .insert(connection_id, sender);

        debug!(
            stream_id,
            connection_id,
            members = groups.get(stream_id).map(HashMap::len).unwrap_or(0),
            "connection joined stream group"
        );
    }

    /// Removes a connection from a stream group.
    ///
    /// Removes the group entry when it empties. Leaving a group the
    /// connection never joined is a no-op.
    pub async fn leave(&self, stream_id: &str, connection_id: u64) {
        let mut groups = self.groups.write().await;
        if let Some(members) = groups.get_mut(stream_id) {
            members.remove(&connection_id);
            if members.is_empty() {
                groups.remove(stream_id);
                debug!(stream_id, "removed empty stream group");
            }
        }
    }

    /// Delivers a message to every open connection in a stream group.
    ///
    /// The message is serialized once. Connections whose channel is closed
    /// or full are skipped, never surfaced as an error of the call.
    /// Returns the number of connections the message was handed to.
    pub async fn send_to_stream(&self, stream_id: &str, message: &EventMessage) -> usize {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to serialize {} message: {}", message.event_type(), e);
                return 0;
            }
        };

        let groups = self.groups.read().await;
        match groups.get(stream_id) {
            Some(members) => self.deliver(members.iter(), &json),
            None => 0,
        }
    }

    /// Delivers a message to every open connection across all groups.
    ///
    /// Returns the number of connections the message was handed to.
    pub async fn broadcast(&self, message: &EventMessage) -> usize {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to serialize {} message: {}", message.event_type(), e);
                return 0;
            }
        };

        let groups = self.groups.read().await;
        self.deliver(groups.values().flat_map(|members| members.iter()), &json)
    }

    /// Hands an already-serialized message to each sender.
    fn deliver<'a>(
        &self,
        members: impl Iterator<Item = (&'a u64, &'a mpsc::Sender<String>)>,
        json: &str,
    ) -> usize {
        let mut delivered = 0;

        for (connection_id, sender) in members {
            match sender.try_send(json.to_string()) {
                Ok(()) => delivered += 1,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    self.metrics.record_message_dropped();
                    warn!(connection_id, "outbound buffer full, dropping message");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    // Connection is gone; the handler's leave is pending.
                    debug!(connection_id, "skipping closed connection");
                }
            }
        }

        delivered
    }

    /// Returns the number of stream groups with at least one member.
    pub async fn group_count(&self) -> usize {
        self.groups.read().await.len()
    }

    /// Returns the number of members in a stream group.
    pub async fn member_count(&self, stream_id: &str) -> usize {
        self.groups
            .read()
            .await
            .get(stream_id)
            .map(HashMap::len)
            .unwrap_or(0)
    }

    /// Returns the total number of registered connections.
    pub async fn connection_count(&self) -> usize {
        self.groups.read().await.values().map(HashMap::len).sum()
    }
}
