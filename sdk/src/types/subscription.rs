//! Subscription types for the Stroomp platform.
//!
//! Provides recurring supporter subscriptions between users and streamers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A supporter subscription to a streamer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Unique subscription id.
    pub id: String,

    /// Subscribing user id.
    pub user_id: String,

    /// Streamer user id.
    pub streamer_id: String,

    /// Subscription tier id.
    pub tier_id: String,

    /// Start of the subscription period.
    pub start_date: DateTime<Utc>,

    /// End of the subscription period.
    pub end_date: DateTime<Utc>,

    /// Whether the subscription is currently active.
    pub is_active: bool,
}

impl Subscription {
    /// Returns true if the subscription covers the given instant.
    #[must_use]
    pub fn covers(&self, at: DateTime<Utc>) -> bool {
        self.is_active && self.start_date <= at && at < self.end_date
    }
}

/// Request to create a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    /// Subscribing user id.
    pub user_id: String,

    /// Streamer user id.
    pub streamer_id: String,

    /// Subscription tier id.
    pub tier_id: String,
}
