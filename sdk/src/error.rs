//! SDK error types.
//!
//! Provides error types for type-level SDK operations.

/// SDK errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// Invalid wallet address.
    #[error("invalid wallet address: {0}")]
    InvalidWallet(String),

    /// Invalid donation amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid poll definition.
    #[error("invalid poll: {0}")]
    InvalidPoll(String),
}
