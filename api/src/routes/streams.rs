//! Stream endpoints.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use stroomp_sdk::types::{ApiResponse, CreateStreamRequest, Stream, StreamStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/streams`
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<Stream>>> {
    Json(ApiResponse::ok(state.store.streams()))
}

/// `GET /api/streams/live`
pub async fn live(State(state): State<AppState>) -> Json<ApiResponse<Vec<Stream>>> {
    Json(ApiResponse::ok(state.store.live_streams()))
}

/// `GET /api/streams/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Stream>>, ApiError> {
    state
        .store
        .stream_by_id(&id)
        .map(|stream| Json(ApiResponse::ok(stream)))
        .ok_or_else(|| ApiError::NotFound(format!("stream {}", id)))
}

/// `POST /api/streams`
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateStreamRequest>,
) -> Result<Json<ApiResponse<Stream>>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }
    if request.streamer_id.trim().is_empty() {
        return Err(ApiError::Validation("streamerId is required".to_string()));
    }

    let now = Utc::now();
    let stream = Stream {
        id: Uuid::new_v4().to_string(),
        title: request.title,
        description: request.description,
        category: request.category,
        status: StreamStatus::Live,
        streamer_id: request.streamer_id,
        viewer_count: 0,
        is_live: true,
        created_at: now,
        start_time: Some(now),
        end_time: None,
    };

    state.store.insert_stream(stream.clone());
    info!(stream_id = %stream.id, "stream created");

    Ok(Json(ApiResponse::ok_with_message(stream, "stream created")))
}
