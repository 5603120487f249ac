//! HTTP client for the Stroomp REST API.
//!
//! This module provides a type-safe HTTP client for interacting with the
//! Stroomp glue API.
//!
//! # Example
//!
//! ```rust,ignore
//! use stroomp_sdk::client::{ClientConfig, StroompClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StroompClient::with_base_url("http://localhost:3001")?;
//!
//!     // List live streams
//!     let streams = client.get_live_streams().await?;
//!     println!("{} streams live", streams.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::StroompClient;
