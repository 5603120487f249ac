//! Donation endpoints.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use stroomp_sdk::types::{ApiResponse, CreateDonationRequest, Donation};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for listing donations.
#[derive(Debug, Deserialize)]
pub struct DonationsQuery {
    /// Stream group to list donations for.
    #[serde(rename = "streamId")]
    pub stream_id: Option<String>,
}

/// `GET /api/donations?streamId=`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<DonationsQuery>,
) -> Result<Json<ApiResponse<Vec<Donation>>>, ApiError> {
    let stream_id = query
        .stream_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("streamId query parameter is required".to_string()))?;

    Ok(Json(ApiResponse::ok(
        state.store.donations_for_stream(&stream_id),
    )))
}

/// `POST /api/donations`
///
/// Stores the donation and notifies the target stream group and the
/// global feed before responding.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateDonationRequest>,
) -> Result<Json<ApiResponse<Donation>>, ApiError> {
    if request.amount == 0 {
        return Err(ApiError::Validation("amount must be positive".to_string()));
    }

    let donation = Donation {
        id: Uuid::new_v4().to_string(),
        from: request.from,
        to: request.to,
        amount: request.amount,
        message: request.message,
        tx_signature: request.tx_signature,
        timestamp: Utc::now(),
        is_anonymous: request.is_anonymous,
    };

    state.store.insert_donation(donation.clone());
    state.dispatcher.donation_created(&donation).await;

    info!(
        donation_id = %donation.id,
        to = %donation.to,
        amount = donation.amount,
        "donation recorded"
    );

    Ok(Json(ApiResponse::ok_with_message(
        donation,
        "donation recorded",
    )))
}
