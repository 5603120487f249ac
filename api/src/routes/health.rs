//! Health endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use stroomp_sdk::types::ApiResponse;

use crate::state::AppState;
use crate::ws::metrics::WsMetricsSnapshot;

/// Liveness report with a WebSocket gauge snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    /// Service status.
    pub status: &'static str,

    /// WebSocket counters.
    pub websocket: WsMetricsSnapshot,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthInfo>> {
    Json(ApiResponse::ok(HealthInfo {
        status: "ok",
        websocket: state.metrics.snapshot(),
    }))
}
