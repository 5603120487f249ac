//! In-memory store implementation.
//!
//! Keeps every table in process memory. Nothing survives a restart;
//! durability is out of scope for the glue API.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stroomp_sdk::types::{Donation, Poll, Stream, Subscription, User, WalletAddress};

use super::{Store, StoreError};

/// In-memory tables.
#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    streams: Vec<Stream>,
    donations: Vec<Donation>,
    polls: Vec<Poll>,
    subscriptions: Vec<Subscription>,
}

/// In-memory [`Store`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for MemoryStore {
    fn insert_user(&self, user: User) {
        self.write().users.push(user);
    }

    fn user_by_wallet(&self, wallet: &WalletAddress) -> Option<User> {
        self.read().users.iter().find(|u| u.wallet == *wallet).cloned()
    }

    fn insert_stream(&self, stream: Stream) {
        self.write().streams.push(stream);
    }

    fn streams(&self) -> Vec<Stream> {
        self.read().streams.clone()
    }

    fn live_streams(&self) -> Vec<Stream> {
        self.read()
            .streams
            .iter()
            .filter(|s| s.is_live())
            .cloned()
            .collect()
    }

    fn stream_by_id(&self, id: &str) -> Option<Stream> {
        self.read().streams.iter().find(|s| s.id == id).cloned()
    }

    fn insert_donation(&self, donation: Donation) {
        self.write().donations.push(donation);
    }

    fn donations_for_stream(&self, stream_id: &str) -> Vec<Donation> {
        self.read()
            .donations
            .iter()
            .filter(|d| d.to.to_string() == stream_id)
            .cloned()
            .collect()
    }

    fn insert_poll(&self, poll: Poll) {
        self.write().polls.push(poll);
    }

    fn polls_for_stream(&self, stream_id: &str) -> Vec<Poll> {
        self.read()
            .polls
            .iter()
            .filter(|p| p.stream_id == stream_id)
            .cloned()
            .collect()
    }

    fn vote_poll(&self, poll_id: &str, option_id: &str) -> Result<Poll, StoreError> {
        let mut tables = self.write();
        let poll = tables
            .polls
            .iter_mut()
            .find(|p| p.id == poll_id)
            .ok_or_else(|| StoreError::PollNotFound(poll_id.to_string()))?;

        if !poll.is_active {
            return Err(StoreError::PollClosed(poll_id.to_string()));
        }

        if !poll.record_vote(option_id) {
            return Err(StoreError::UnknownOption(option_id.to_string()));
        }

        Ok(poll.clone())
    }

    fn insert_subscription(&self, subscription: Subscription) {
        self.write().subscriptions.push(subscription);
    }

    fn subscriptions_for_user(&self, user_id: &str) -> Vec<Subscription> {
        self.read()
            .subscriptions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }

    fn subscriptions_for_streamer(&self, streamer_id: &str) -> Vec<Subscription> {
        self.read()
            .subscriptions
            .iter()
            .filter(|s| s.streamer_id == streamer_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stroomp_sdk::types::{PollOption, StreamStatus};

    fn sample_stream(id: &str, status: StreamStatus) -> Stream {
        Stream {
            id: id.to_string(),
            title: "test".to_string(),
            description: None,
            category: None,
            status,
            streamer_id: "user-1".to_string(),
            viewer_count: 0,
            is_live: status == StreamStatus::Live,
            created_at: Utc::now(),
            start_time: None,
            end_time: None,
        }
    }

    fn sample_poll(id: &str, active: bool) -> Poll {
        Poll {
            id: id.to_string(),
            question: "q".to_string(),
            options: vec![
                PollOption {
                    id: "option-1".to_string(),
                    text: "a".to_string(),
                    votes: 0,
                },
                PollOption {
                    id: "option-2".to_string(),
                    text: "b".to_string(),
                    votes: 0,
                },
            ],
            is_active: active,
            stream_id: "s1".to_string(),
            created_at: Utc::now(),
        }
    }

    fn sample_donation(to: WalletAddress) -> Donation {
        Donation {
            id: "donation-1".to_string(),
            from: WalletAddress::from_bytes([1u8; 32]),
            to,
            amount: 100,
            message: None,
            tx_signature: "sig".to_string(),
            timestamp: Utc::now(),
            is_anonymous: false,
        }
    }

    #[test]
    fn test_user_by_wallet() {
        let store = MemoryStore::new();
        let wallet = WalletAddress::from_bytes([7u8; 32]);

        assert!(store.user_by_wallet(&wallet).is_none());

        store.insert_user(User {
            id: "user-1".to_string(),
            wallet,
            username: None,
            created_at: Utc::now(),
        });

        let found = store.user_by_wallet(&wallet);
        assert!(found.is_some());
        assert_eq!(found.map(|u| u.id), Some("user-1".to_string()));
    }

    #[test]
    fn test_live_streams_filter() {
        let store = MemoryStore::new();
        store.insert_stream(sample_stream("s-live", StreamStatus::Live));
        store.insert_stream(sample_stream("s-ended", StreamStatus::Ended));

        assert_eq!(store.streams().len(), 2);

        let live = store.live_streams();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, "s-live");
    }

    #[test]
    fn test_stream_by_id() {
        let store = MemoryStore::new();
        store.insert_stream(sample_stream("s1", StreamStatus::Live));

        assert!(store.stream_by_id("s1").is_some());
        assert!(store.stream_by_id("s2").is_none());
    }

    #[test]
    fn test_donations_filtered_by_stream_group() {
        let store = MemoryStore::new();
        let streamer_a = WalletAddress::from_bytes([2u8; 32]);
        let streamer_b = WalletAddress::from_bytes([3u8; 32]);

        store.insert_donation(sample_donation(streamer_a));
        store.insert_donation(sample_donation(streamer_b));

        let donations = store.donations_for_stream(&streamer_a.to_string());
        assert_eq!(donations.len(), 1);
        assert_eq!(donations[0].to, streamer_a);
    }

    #[test]
    fn test_vote_poll() {
        let store = MemoryStore::new();
        store.insert_poll(sample_poll("poll-1", true));

        let poll = store.vote_poll("poll-1", "option-2").expect("vote");
        assert_eq!(poll.total_votes(), 1);
        assert_eq!(poll.options[1].votes, 1);

        // The tally persists across calls.
        let poll = store.vote_poll("poll-1", "option-2").expect("vote");
        assert_eq!(poll.options[1].votes, 2);
    }

    #[test]
    fn test_vote_poll_not_found() {
        let store = MemoryStore::new();
        let result = store.vote_poll("missing", "option-1");
        assert_eq!(result, Err(StoreError::PollNotFound("missing".to_string())));
    }

    #[test]
    fn test_vote_poll_closed() {
        let store = MemoryStore::new();
        store.insert_poll(sample_poll("poll-1", false));

        let result = store.vote_poll("poll-1", "option-1");
        assert_eq!(result, Err(StoreError::PollClosed("poll-1".to_string())));
    }

    #[test]
    fn test_vote_poll_unknown_option() {
        let store = MemoryStore::new();
        store.insert_poll(sample_poll("poll-1", true));

        let result = store.vote_poll("poll-1", "option-99");
        assert_eq!(
            result,
            Err(StoreError::UnknownOption("option-99".to_string()))
        );
    }

    #[test]
    fn test_subscriptions_by_user_and_streamer() {
        let store = MemoryStore::new();
        let now = Utc::now();
        store.insert_subscription(Subscription {
            id: "sub-1".to_string(),
            user_id: "user-1".to_string(),
            streamer_id: "user-2".to_string(),
            tier_id: "tier-1".to_string(),
            start_date: now,
            end_date: now,
            is_active: true,
        });

        assert_eq!(store.subscriptions_for_user("user-1").len(), 1);
        assert_eq!(store.subscriptions_for_user("user-2").len(), 0);
        assert_eq!(store.subscriptions_for_streamer("user-2").len(), 1);
    }
}
