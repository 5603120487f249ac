//! Notification dispatcher.
//!
//! Translates domain events into registry deliveries. Dispatch is
//! fire-and-forget: no retry, no queuing, and no offline delivery — an
//! event with no listening connections is dropped.

use std::sync::Arc;

use tracing::debug;

use stroomp_sdk::types::{Donation, Poll};
use stroomp_sdk::ws::EventMessage;

use super::registry::StreamRegistry;

/// Dispatches domain events to WebSocket stream groups.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    registry: Arc<StreamRegistry>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher delivering through the given registry.
    #[must_use]
    pub fn new(registry: Arc<StreamRegistry>) -> Self {
        Self { registry }
    }

    /// Notifies about a new donation.
    ///
    /// The full donation goes to the target stream group (`donation.to`);
    /// a redacted notice goes to every open connection for the global
    /// notification feed.
    pub async fn donation_created(&self, donation: &Donation) {
        let stream_id = donation.to.to_string();

        let targeted = self
            .registry
            .send_to_stream(&stream_id, &EventMessage::donation(donation.clone()))
            .await;

        let global = self
            .registry
            .broadcast(&EventMessage::global_donation(donation))
            .await;

        debug!(
            %stream_id,
            targeted, global, "dispatched donation notifications"
        );
    }

    /// Notifies a poll's stream group about its current state.
    pub async fn poll_updated(&self, poll: &Poll) {
        let delivered = self
            .registry
            .send_to_stream(&poll.stream_id, &EventMessage::poll_update(poll.clone()))
            .await;

        debug!(
            stream_id = %poll.stream_id,
            delivered, "dispatched poll update"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::registry::GLOBAL_STREAM;
    use chrono::Utc;
    use stroomp_sdk::types::{PollOption, WalletAddress};
    use tokio::sync::mpsc;

    fn streamer_wallet() -> WalletAddress {
        WalletAddress::from_bytes([2u8; 32])
    }

    fn sample_donation() -> Donation {
        Donation {
            id: "donation-1".to_string(),
            from: WalletAddress::from_bytes([1u8; 32]),
            to: streamer_wallet(),
            amount: 1000,
            message: Some("keep going".to_string()),
            tx_signature: "sig".to_string(),
            timestamp: Utc::now(),
            is_anonymous: false,
        }
    }

    fn sample_poll(stream_id: &str) -> Poll {
        Poll {
            id: "poll-1".to_string(),
            question: "Next game?".to_string(),
            options: vec![PollOption {
                id: "option-1".to_string(),
                text: "Chess".to_string(),
                votes: 3,
            }],
            is_active: true,
            stream_id: stream_id.to_string(),
            created_at: Utc::now(),
        }
    }

    fn drain(rx: &mut mpsc::Receiver<String>) -> Vec<serde_json::Value> {
        let mut messages = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            messages.push(serde_json::from_str(&msg).expect("envelope json"));
        }
        messages
    }

    #[tokio::test]
    async fn test_donation_reaches_stream_and_global() {
        let registry = Arc::new(StreamRegistry::default());
        let dispatcher = NotificationDispatcher::new(Arc::clone(&registry));

        let stream_id = streamer_wallet().to_string();
        let (tx_viewer, mut rx_viewer) = mpsc::channel(16);
        let (tx_lurker, mut rx_lurker) = mpsc::channel(16);
        registry.join(&stream_id, 1, tx_viewer).await;
        registry.join(GLOBAL_STREAM, 2, tx_lurker).await;

        dispatcher.donation_created(&sample_donation()).await;

        // The stream viewer gets the full donation, then the global notice.
        let viewer_messages = drain(&mut rx_viewer);
        assert_eq!(viewer_messages.len(), 2);
        assert_eq!(viewer_messages[0]["type"], "donation");
        assert_eq!(viewer_messages[1]["type"], "global_donation");

        // The lurker only sees the redacted global notice.
        let lurker_messages = drain(&mut rx_lurker);
        assert_eq!(lurker_messages.len(), 1);
        assert_eq!(lurker_messages[0]["type"], "global_donation");
        assert!(lurker_messages[0]["data"].get("txSignature").is_none());
        assert!(lurker_messages[0]["data"].get("id").is_none());
    }

    #[tokio::test]
    async fn test_donation_with_no_listeners_is_dropped() {
        let registry = Arc::new(StreamRegistry::default());
        let dispatcher = NotificationDispatcher::new(registry);

        // No connections anywhere; dispatch must not error.
        dispatcher.donation_created(&sample_donation()).await;
    }

    #[tokio::test]
    async fn test_poll_update_targets_its_stream() {
        let registry = Arc::new(StreamRegistry::default());
        let dispatcher = NotificationDispatcher::new(Arc::clone(&registry));

        let (tx_s1, mut rx_s1) = mpsc::channel(16);
        let (tx_s2, mut rx_s2) = mpsc::channel(16);
        registry.join("s1", 1, tx_s1).await;
        registry.join("s2", 2, tx_s2).await;

        dispatcher.poll_updated(&sample_poll("s1")).await;

        let s1_messages = drain(&mut rx_s1);
        assert_eq!(s1_messages.len(), 1);
        assert_eq!(s1_messages[0]["type"], "poll_update");
        assert_eq!(s1_messages[0]["data"]["question"], "Next game?");

        assert!(drain(&mut rx_s2).is_empty());
    }
}
