//! Shared types for the Stroomp platform.
//!
//! This module provides the domain types exchanged between the API server,
//! the WebSocket fan-out layer, and clients.

pub mod donation;
pub mod poll;
pub mod response;
pub mod stream;
pub mod subscription;
pub mod user;
pub mod wallet;

pub use donation::{CreateDonationRequest, Donation, DonationNotice};
pub use poll::{CreatePollRequest, Poll, PollOption, VotePollRequest};
pub use response::ApiResponse;
pub use stream::{CreateStreamRequest, Stream, StreamStatus};
pub use subscription::{CreateSubscriptionRequest, Subscription};
pub use user::{CreateUserRequest, User};
pub use wallet::WalletAddress;
