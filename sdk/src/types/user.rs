//! User types for the Stroomp platform.
//!
//! Provides the platform user record, keyed by wallet address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wallet::WalletAddress;

/// A platform user.
///
/// Users are identified by their wallet address; usernames are optional
/// display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user id.
    pub id: String,

    /// Wallet address (unique per user).
    pub wallet: WalletAddress,

    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

/// Request to create a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Wallet address for the new user.
    pub wallet: WalletAddress,

    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serde_camel_case() {
        let user = User {
            id: "user-1".to_string(),
            wallet: WalletAddress::from_bytes([1u8; 32]),
            username: Some("alice".to_string()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).expect("serialize");
        assert!(json.contains("createdAt"));
        assert!(json.contains("alice"));
    }

    #[test]
    fn test_user_username_omitted_when_none() {
        let user = User {
            id: "user-1".to_string(),
            wallet: WalletAddress::from_bytes([1u8; 32]),
            username: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).expect("serialize");
        assert!(!json.contains("username"));
    }

    #[test]
    fn test_create_user_request_deserialize() {
        let json = r#"{"wallet":"11111111111111111111111111111111","username":"bob"}"#;
        let req: CreateUserRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.username, Some("bob".to_string()));
    }
}
