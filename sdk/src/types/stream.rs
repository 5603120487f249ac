//! Stream types for the Stroomp platform.
//!
//! Provides the streaming session record and its lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamStatus {
    /// Scheduled but not started.
    Upcoming,

    /// Currently live.
    Live,

    /// Finished.
    Ended,
}

impl StreamStatus {
    /// Returns the status as its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Live => "LIVE",
            Self::Ended => "ENDED",
        }
    }
}

/// One streaming session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    /// Unique stream id.
    pub id: String,

    /// Stream title.
    pub title: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional category tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Lifecycle status.
    pub status: StreamStatus,

    /// Id of the streaming user.
    pub streamer_id: String,

    /// Current viewer count.
    pub viewer_count: u64,

    /// Whether the stream is currently live.
    pub is_live: bool,

    /// Record creation time.
    pub created_at: DateTime<Utc>,

    /// When the stream went live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// When the stream ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

impl Stream {
    /// Returns true if the stream status is `Live`.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.status == StreamStatus::Live
    }
}

/// Request to create a stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStreamRequest {
    /// Stream title.
    pub title: String,

    /// Id of the streaming user.
    pub streamer_id: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional category tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
