//! User endpoints.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use stroomp_sdk::types::{ApiResponse, CreateUserRequest, User, WalletAddress};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/users/wallet/{wallet}`
pub async fn get_by_wallet(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let wallet =
        WalletAddress::parse(&wallet).map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .store
        .user_by_wallet(&wallet)
        .map(|user| Json(ApiResponse::ok(user)))
        .ok_or_else(|| ApiError::NotFound(format!("user for wallet {}", wallet)))
}

/// `POST /api/users`
///
/// Creates a user, or returns the existing record when the wallet is
/// already registered.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    if let Some(existing) = state.store.user_by_wallet(&request.wallet) {
        return Ok(Json(ApiResponse::ok_with_message(
            existing,
            "existing user returned",
        )));
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        wallet: request.wallet,
        username: request.username,
        created_at: Utc::now(),
    };

    state.store.insert_user(user.clone());
    info!(user_id = %user.id, wallet = %user.wallet, "user created");

    Ok(Json(ApiResponse::ok_with_message(user, "user created")))
}
