//! Donation types for the Stroomp platform.
//!
//! Provides the donation record, the creation request, and the redacted
//! notice shape used for platform-wide notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wallet::WalletAddress;
use crate::error::SdkError;

/// A wallet-to-wallet donation to a streamer.
///
/// Donations are immutable once constructed. The recipient address (`to`)
/// doubles as the stream group identifier for targeted notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Unique donation id.
    pub id: String,

    /// Donor wallet address.
    pub from: WalletAddress,

    /// Streamer wallet address (target stream group).
    pub to: WalletAddress,

    /// Amount in lamports.
    pub amount: u64,

    /// Optional message from the donor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// On-chain transaction signature (carried opaquely, never verified).
    pub tx_signature: String,

    /// When the donation was recorded.
    pub timestamp: DateTime<Utc>,

    /// Whether the donor asked to stay anonymous.
    #[serde(default)]
    pub is_anonymous: bool,
}

/// Request to create a donation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    /// Donor wallet address.
    pub from: WalletAddress,

    /// Streamer wallet address.
    pub to: WalletAddress,

    /// Amount in lamports.
    pub amount: u64,

    /// Optional message from the donor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// On-chain transaction signature.
    pub tx_signature: String,

    /// Whether the donor asked to stay anonymous.
    #[serde(default)]
    pub is_anonymous: bool,
}

impl CreateDonationRequest {
    /// Validates the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::InvalidAmount` if the amount is zero.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.amount == 0 {
            return Err(SdkError::InvalidAmount(
                "amount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Redacted donation projection for platform-wide notices.
///
/// Carries only the fields meant for global display; the donation id,
/// transaction signature, and anonymity flag stay out of the global feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationNotice {
    /// Donor wallet address.
    pub from: WalletAddress,

    /// Streamer wallet address.
    pub to: WalletAddress,

    /// Amount in lamports.
    pub amount: u64,

    /// Optional message from the donor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// When the donation was recorded.
    pub timestamp: DateTime<Utc>,
}

impl From<&Donation> for DonationNotice {
    fn from(donation: &Donation) -> Self {
        Self {
            from: donation.from,
            to: donation.to,
            amount: donation.amount,
            message: donation.message.clone(),
            timestamp: donation.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_donation() -> Donation {
        Donation {
            id: "donation-1".to_string(),
            from: WalletAddress::from_bytes([1u8; 32]),
            to: WalletAddress::from_bytes([2u8; 32]),
            amount: 5000,
            message: Some("great stream".to_string()),
            tx_signature: "5mD3sig".to_string(),
            timestamp: Utc::now(),
            is_anonymous: false,
        }
    }

    #[test]
    fn test_donation_serde_camel_case() {
        let json = serde_json::to_string(&sample_donation()).expect("serialize");
        assert!(json.contains("txSignature"));
        assert!(json.contains("isAnonymous"));
    }

    #[test]
    fn test_donation_is_anonymous_defaults_false() {
        let json = r#"{
            "id": "donation-1",
            "from": "11111111111111111111111111111111",
            "to": "11111111111111111111111111111111",
            "amount": 100,
            "txSignature": "sig",
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;
        let donation: Donation = serde_json::from_str(json).expect("deserialize");
        assert!(!donation.is_anonymous);
    }

    #[test]
    fn test_notice_redacts_internal_fields() {
        let donation = sample_donation();
        let notice = DonationNotice::from(&donation);

        let json = serde_json::to_string(&notice).expect("serialize");
        assert!(!json.contains("txSignature"));
        assert!(!json.contains("isAnonymous"));
        assert!(!json.contains("donation-1"));
        assert!(json.contains("amount"));
        assert!(json.contains("great stream"));
    }

    #[test]
    fn test_create_request_validate() {
        let request = CreateDonationRequest {
            from: WalletAddress::from_bytes([1u8; 32]),
            to: WalletAddress::from_bytes([2u8; 32]),
            amount: 100,
            message: None,
            tx_signature: "sig".to_string(),
            is_anonymous: false,
        };
        assert!(request.validate().is_ok());

        let request = CreateDonationRequest { amount: 0, ..request };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_notice_keeps_public_fields() {
        let donation = sample_donation();
        let notice = DonationNotice::from(&donation);

        assert_eq!(notice.from, donation.from);
        assert_eq!(notice.to, donation.to);
        assert_eq!(notice.amount, donation.amount);
        assert_eq!(notice.message, donation.message);
        assert_eq!(notice.timestamp, donation.timestamp);
    }
}
