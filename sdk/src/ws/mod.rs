//! WebSocket client for real-time Stroomp events.
//!
//! This module defines the `{type, data}` event envelope shared with the
//! server and provides a client for consuming live donation and poll
//! notifications.
//!
//! # Message Types
//!
//! - `welcome` — Sent by the server on connect with the resolved group id
//! - `echo` — Server echo of any inbound JSON message
//! - `donation` — Full donation, delivered to the target stream group
//! - `global_donation` — Redacted donation, delivered to every connection
//! - `poll_update` — Poll state, delivered to the poll's stream group
//!
//! # Example
//!
//! ```rust,ignore
//! use stroomp_sdk::ws::{StroompWsClient, WsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WsConfig::new("ws://localhost:3001/ws").with_stream_id("my-stream");
//!     let client = StroompWsClient::new(config)?;
//!
//!     client.connect().await?;
//!
//!     loop {
//!         let event = client.next_event().await?;
//!         println!("Received: {:?}", event);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod messages;

pub use client::StroompWsClient;
pub use config::WsConfig;
pub use error::WsError;
pub use messages::{EventMessage, WelcomeInfo, WELCOME_MESSAGE};
