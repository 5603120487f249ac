//! WebSocket fan-out layer.
//!
//! Tracks which connections are watching which stream and delivers live
//! notifications to them.
//!
//! # Groups
//!
//! A connecting client names its stream group with the `streamId` query
//! parameter; absent or blank values fall back to `global`. A connection
//! belongs to exactly one group for its lifetime.
//!
//! # Message Types
//!
//! - `welcome` — Sent on connect with the resolved group id
//! - `echo` — Echo of any inbound JSON message
//! - `donation` — Full donation, sent to the target stream group
//! - `global_donation` — Redacted donation, sent to every connection
//! - `poll_update` — Poll state, sent to the poll's stream group

pub mod connection;
pub mod dispatcher;
pub mod handler;
pub mod metrics;
pub mod registry;

pub use connection::Connection;
pub use dispatcher::NotificationDispatcher;
pub use handler::ws_handler;
pub use metrics::WsMetrics;
pub use registry::{StreamRegistry, GLOBAL_STREAM};
