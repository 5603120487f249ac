//! Wallet address type.
//!
//! Provides a validated wrapper for base58-encoded wallet addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SdkError;

/// A 32-byte wallet address, base58-encoded on the wire.
///
/// Wallet addresses identify both donors and streamers; a streamer's
/// address doubles as the stream group identifier on the WebSocket side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletAddress([u8; 32]);

impl WalletAddress {
    /// Parses a base58-encoded wallet address.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::InvalidWallet` if the string is not valid base58
    /// or does not decode to exactly 32 bytes.
    pub fn parse(s: &str) -> Result<Self, SdkError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| SdkError::InvalidWallet(s.to_string()))?;

        if bytes.len() != 32 {
            return Err(SdkError::InvalidWallet(s.to_string()));
        }

        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Creates a wallet address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw address bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

impl FromStr for WalletAddress {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for WalletAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
