//! WebSocket event envelope.
//!
//! Defines the tagged `{type, data}` message format exchanged over the
//! socket. Every payload is a typed variant; nothing dynamically shaped
//! crosses the boundary except the echo placeholder.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Donation, DonationNotice, Poll};

/// Greeting text carried by the welcome message.
pub const WELCOME_MESSAGE: &str = "Connected to Stroomp WebSocket server";

/// Payload of the `welcome` message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeInfo {
    /// Human-readable greeting.
    pub message: String,

    /// The stream group this connection was joined to.
    pub stream_id: String,
}

/// An event delivered over the socket, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum EventMessage {
    /// Sent once, immediately after a successful connect.
    Welcome(WelcomeInfo),

    /// Echo of an inbound client message.
    Echo(Value),

    /// A donation, delivered to the target stream group.
    Donation(Donation),

    /// A redacted donation, delivered to every open connection.
    GlobalDonation(DonationNotice),

    /// Poll state, delivered to the poll's stream group.
    PollUpdate(Poll),
}

impl EventMessage {
    /// Creates a welcome message for the resolved stream group.
    #[must_use]
    pub fn welcome(stream_id: impl Into<String>) -> Self {
        Self::Welcome(WelcomeInfo {
            message: WELCOME_MESSAGE.to_string(),
            stream_id: stream_id.into(),
        })
    }

    /// Creates an echo message wrapping a parsed client payload.
    #[must_use]
    pub fn echo(data: Value) -> Self {
        Self::Echo(data)
    }

    /// Creates a donation message.
    #[must_use]
    pub fn donation(donation: Donation) -> Self {
        Self::Donation(donation)
    }

    /// Creates a redacted global donation notice.
    #[must_use]
    pub fn global_donation(donation: &Donation) -> Self {
        Self::GlobalDonation(DonationNotice::from(donation))
    }

    /// Creates a poll update message.
    #[must_use]
    pub fn poll_update(poll: Poll) -> Self {
        Self::PollUpdate(poll)
    }

    /// Returns the wire tag of this event.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Welcome(_) => "welcome",
            Self::Echo(_) => "echo",
            Self::Donation(_) => "donation",
            Self::GlobalDonation(_) => "global_donation",
            Self::PollUpdate(_) => "poll_update",
        }
    }
}
