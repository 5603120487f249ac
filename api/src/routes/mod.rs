//! REST glue endpoints.
//!
//! Thin handlers over the injected store. Donation and poll writes invoke
//! the notification dispatcher synchronously before responding.

pub mod donations;
pub mod health;
pub mod polls;
pub mod streams;
pub mod subscriptions;
pub mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;
use crate::ws::ws_handler;

/// Builds the API route table.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/streams", get(streams::list).post(streams::create))
        .route("/api/streams/live", get(streams::live))
        .route("/api/streams/{id}", get(streams::get_by_id))
        .route(
            "/api/donations",
            get(donations::list).post(donations::create),
        )
        .route("/api/polls", get(polls::list).post(polls::create))
        .route("/api/polls/{id}/vote", post(polls::vote))
        .route("/api/users", post(users::create))
        .route("/api/users/wallet/{wallet}", get(users::get_by_wallet))
        .route(
            "/api/subscriptions",
            get(subscriptions::list_for_user).post(subscriptions::create),
        )
        .route(
            "/api/subscriptions/streamer/{id}",
            get(subscriptions::list_for_streamer),
        )
        .route("/ws", get(ws_handler))
}
