//! Stroomp API - glue server for the Stroomp streaming platform.
//!
//! This crate provides the REST endpoints over an injected in-memory
//! store and the WebSocket fan-out layer that delivers live donation and
//! poll notifications to stream viewers.
//!
//! # Components
//!
//! - [`routes`]: REST glue endpoints
//! - [`store`]: Injected storage abstraction
//! - [`ws`]: Connection registry, notification dispatcher, and handler
//! - [`server`]: Configuration and axum wiring
//! - [`state`]: Shared application state
//! - [`error`]: API error mapping

pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod ws;

pub use error::ApiError;
pub use server::{router, Server, ServerConfig};
pub use state::AppState;
