//! Poll endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use stroomp_sdk::types::{ApiResponse, CreatePollRequest, Poll, PollOption, VotePollRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for listing polls.
#[derive(Debug, Deserialize)]
pub struct PollsQuery {
    /// Stream group to list polls for.
    #[serde(rename = "streamId")]
    pub stream_id: Option<String>,
}

/// `GET /api/polls?streamId=`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PollsQuery>,
) -> Result<Json<ApiResponse<Vec<Poll>>>, ApiError> {
    let stream_id = query
        .stream_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("streamId query parameter is required".to_string()))?;

    Ok(Json(ApiResponse::ok(
        state.store.polls_for_stream(&stream_id),
    )))
}

/// `POST /api/polls`
///
/// Creates a poll and notifies its stream group before responding.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreatePollRequest>,
) -> Result<Json<ApiResponse<Poll>>, ApiError> {
    if request.question.trim().is_empty() {
        return Err(ApiError::Validation("question is required".to_string()));
    }
    if request.stream_id.trim().is_empty() {
        return Err(ApiError::Validation("streamId is required".to_string()));
    }
    if request.options.len() < 2 {
        return Err(ApiError::Validation(
            "a poll needs at least two options".to_string(),
        ));
    }

    let options = request
        .options
        .into_iter()
        .enumerate()
        .map(|(index, text)| PollOption {
            id: format!("option-{}", index + 1),
            text,
            votes: 0,
        })
        .collect();

    let poll = Poll {
        id: Uuid::new_v4().to_string(),
        question: request.question,
        options,
        is_active: true,
        stream_id: request.stream_id,
        created_at: Utc::now(),
    };

    state.store.insert_poll(poll.clone());
    state.dispatcher.poll_updated(&poll).await;

    info!(poll_id = %poll.id, stream_id = %poll.stream_id, "poll created");

    Ok(Json(ApiResponse::ok_with_message(poll, "poll created")))
}

/// `POST /api/polls/{id}/vote`
///
/// Records the vote and notifies the poll's stream group with the updated
/// tally before responding.
pub async fn vote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<VotePollRequest>,
) -> Result<Json<ApiResponse<Poll>>, ApiError> {
    let poll = state.store.vote_poll(&id, &request.option_id)?;
    state.dispatcher.poll_updated(&poll).await;

    Ok(Json(ApiResponse::ok_with_message(poll, "vote recorded")))
}
