//! Storage abstraction for the glue API.
//!
//! The REST layer works against the [`Store`] trait rather than
//! process-wide mutable state, so tests inject fresh stores and a
//! persistent backend can replace the in-memory one without touching the
//! handlers.

pub mod memory;

pub use memory::MemoryStore;

use stroomp_sdk::types::{Donation, Poll, Stream, Subscription, User, WalletAddress};

/// Storage errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Poll not found.
    #[error("poll not found: {0}")]
    PollNotFound(String),

    /// Unknown poll option.
    #[error("unknown poll option: {0}")]
    UnknownOption(String),

    /// Poll no longer accepts votes.
    #[error("poll is closed: {0}")]
    PollClosed(String),
}

/// Repository of platform records.
///
/// Methods are synchronous: implementations must not block beyond
/// short-lived in-process locking.
pub trait Store: Send + Sync {
    /// Inserts a user record.
    fn insert_user(&self, user: User);

    /// Looks up a user by wallet address.
    fn user_by_wallet(&self, wallet: &WalletAddress) -> Option<User>;

    /// Inserts a stream record.
    fn insert_stream(&self, stream: Stream);

    /// Returns all streams.
    fn streams(&self) -> Vec<Stream>;

    /// Returns streams that are currently live.
    fn live_streams(&self) -> Vec<Stream>;

    /// Looks up a stream by id.
    fn stream_by_id(&self, id: &str) -> Option<Stream>;

    /// Inserts a donation record.
    fn insert_donation(&self, donation: Donation);

    /// Returns donations addressed to a stream group.
    fn donations_for_stream(&self, stream_id: &str) -> Vec<Donation>;

    /// Inserts a poll record.
    fn insert_poll(&self, poll: Poll);

    /// Returns polls attached to a stream group.
    fn polls_for_stream(&self, stream_id: &str) -> Vec<Poll>;

    /// Records a vote and returns the updated poll.
    ///
    /// # Errors
    ///
    /// Returns `PollNotFound`, `PollClosed`, or `UnknownOption`.
    fn vote_poll(&self, poll_id: &str, option_id: &str) -> Result<Poll, StoreError>;

    /// Inserts a subscription record.
    fn insert_subscription(&self, subscription: Subscription);

    /// Returns a user's subscriptions.
    fn subscriptions_for_user(&self, user_id: &str) -> Vec<Subscription>;

    /// Returns the subscriptions to a streamer.
    fn subscriptions_for_streamer(&self, streamer_id: &str) -> Vec<Subscription>;
}
