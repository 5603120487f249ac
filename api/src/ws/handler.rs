//! WebSocket connection handler.
//!
//! Provides the upgrade handler and the per-connection loop: group
//! resolution, welcome, echo, and teardown.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use stroomp_sdk::ws::EventMessage;

use super::connection::{Connection, OUTBOUND_BUFFER};
use super::registry::GLOBAL_STREAM;
use crate::state::AppState;

/// Query parameters accepted by the WebSocket endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WsQuery {
    /// Stream group to join.
    #[serde(rename = "streamId")]
    pub stream_id: Option<String>,
}

/// Resolves the stream group for a connecting client.
///
/// Absent or blank identifiers fall back to the global group.
fn resolve_stream_id(stream_id: Option<&str>) -> String {
    match stream_id {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => GLOBAL_STREAM.to_string(),
    }
}

/// WebSocket upgrade handler.
///
/// Upgrades the HTTP connection and joins the client to its stream group.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let stream_id = resolve_stream_id(query.stream_id.as_deref());
    ws.on_upgrade(move |socket| handle_connection(socket, stream_id, state))
}

/// Handles one WebSocket connection from join to teardown.
async fn handle_connection(socket: WebSocket, stream_id: String, state: AppState) {
    state.metrics.record_connection_opened();

    let (mut ws_sender, mut ws_receiver) = socket.split();

    // Bounded outbound buffer; registry deliveries drop instead of waiting
    // on a slow consumer.
    let (tx, mut rx) = mpsc::channel::<String>(OUTBOUND_BUFFER);

    let connection = Connection::new(stream_id, tx.clone());
    let connection_id = connection.id();

    state
        .registry
        .join(connection.stream_id(), connection_id, tx)
        .await;

    info!(
        connection_id,
        stream_id = connection.stream_id(),
        "WebSocket connection opened"
    );

    // Forward queued messages to the socket.
    let metrics = Arc::clone(&state.metrics);
    let sender_task = tokio::spawn(async move {
        while let Some(json) = rx.recv().await {
            if ws_sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
            metrics.record_message_sent();
        }
    });

    connection
        .send(&EventMessage::welcome(connection.stream_id()))
        .await;

    while let Some(result) = ws_receiver.next().await {
        let msg = match result {
            Ok(msg) => msg,
            Err(e) => {
                warn!(connection_id, "WebSocket error: {}", e);
                state.metrics.record_error();
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                state.metrics.record_message_received();
                match serde_json::from_str::<Value>(&text) {
                    Ok(data) => {
                        connection.send(&EventMessage::echo(data)).await;
                    }
                    Err(e) => {
                        // Malformed input is logged; the connection stays open.
                        warn!(connection_id, "ignoring malformed message: {}", e);
                        state.metrics.record_error();
                    }
                }
            }
            Message::Ping(_) | Message::Pong(_) => {
                debug!(connection_id, "keepalive frame");
            }
            Message::Close(_) => {
                debug!(connection_id, "close requested");
                break;
            }
            _ => {}
        }
    }

    state
        .registry
        .leave(connection.stream_id(), connection_id)
        .await;
    state.metrics.record_connection_closed();
    sender_task.abort();

    info!(connection_id, "WebSocket connection closed");
}
