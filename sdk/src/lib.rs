//! Stroomp SDK - Rust client library for the Stroomp streaming platform.
//!
//! This crate provides the shared domain types and client utilities for
//! interacting with the Stroomp API: streams, wallet-to-wallet donations,
//! polls, and subscriptions.
//!
//! # Core Types
//!
//! - [`WalletAddress`] — Validated base58 wallet address
//! - [`StreamStatus`] — Stream lifecycle state (upcoming, live, ended)
//!
//! # Entity Types
//!
//! - [`User`] — Platform user keyed by wallet address
//! - [`Stream`] — One streaming session
//! - [`Donation`] — A wallet-to-wallet donation to a streamer
//! - [`Poll`] — A viewer poll attached to a stream
//! - [`Subscription`] — A recurring supporter subscription
//!
//! # Example
//!
//! ```rust
//! use stroomp_sdk::{StreamStatus, WalletAddress};
//!
//! let wallet = WalletAddress::parse("11111111111111111111111111111111");
//! assert!(wallet.is_ok());
//! assert_eq!(StreamStatus::Live.as_str(), "LIVE");
//! ```

pub mod client;
pub mod error;
pub mod types;
pub mod ws;

pub use error::SdkError;
pub use types::{
    ApiResponse, CreateDonationRequest, CreatePollRequest, CreateStreamRequest,
    CreateSubscriptionRequest, CreateUserRequest, Donation, DonationNotice, Poll, PollOption,
    Stream, StreamStatus, Subscription, User, VotePollRequest, WalletAddress,
};
