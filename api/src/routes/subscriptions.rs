//! Subscription endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Duration, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use stroomp_sdk::types::{ApiResponse, CreateSubscriptionRequest, Subscription};

use crate::error::ApiError;
use crate::state::AppState;

/// Length of one subscription period in days.
const SUBSCRIPTION_PERIOD_DAYS: i64 = 30;

/// Query parameters for listing a user's subscriptions.
#[derive(Debug, Deserialize)]
pub struct SubscriptionsQuery {
    /// User to list subscriptions for.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// `GET /api/subscriptions?userId=`
pub async fn list_for_user(
    State(state): State<AppState>,
    Query(query): Query<SubscriptionsQuery>,
) -> Result<Json<ApiResponse<Vec<Subscription>>>, ApiError> {
    let user_id = query
        .user_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("userId query parameter is required".to_string()))?;

    Ok(Json(ApiResponse::ok(
        state.store.subscriptions_for_user(&user_id),
    )))
}

/// `GET /api/subscriptions/streamer/{id}`
pub async fn list_for_streamer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<Vec<Subscription>>> {
    Json(ApiResponse::ok(state.store.subscriptions_for_streamer(&id)))
}

/// `POST /api/subscriptions`
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateSubscriptionRequest>,
) -> Result<Json<ApiResponse<Subscription>>, ApiError> {
    if request.user_id.trim().is_empty() {
        return Err(ApiError::Validation("userId is required".to_string()));
    }
    if request.streamer_id.trim().is_empty() {
        return Err(ApiError::Validation("streamerId is required".to_string()));
    }
    if request.tier_id.trim().is_empty() {
        return Err(ApiError::Validation("tierId is required".to_string()));
    }

    let now = Utc::now();
    let subscription = Subscription {
        id: Uuid::new_v4().to_string(),
        user_id: request.user_id,
        streamer_id: request.streamer_id,
        tier_id: request.tier_id,
        start_date: now,
        end_date: now + Duration::days(SUBSCRIPTION_PERIOD_DAYS),
        is_active: true,
    };

    state.store.insert_subscription(subscription.clone());
    info!(
        subscription_id = %subscription.id,
        streamer_id = %subscription.streamer_id,
        "subscription created"
    );

    Ok(Json(ApiResponse::ok_with_message(
        subscription,
        "subscription created",
    )))
}
