//! Premium subscription handlers

use axum::{extract::State, Json};
use timble_service::dto::MessageResponse;
use timble_service::PremiumService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Grant premium to the current user
///
/// POST /users/@me/premium
pub async fn grant(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let response = PremiumService::new(state.service_context())
        .grant(auth.user_id)
        .await?;
    Ok(Json(response))
}

/// Revoke premium from the current user
///
/// DELETE /users/@me/premium
pub async fn revoke(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let response = PremiumService::new(state.service_context())
        .revoke(auth.user_id)
        .await?;
    Ok(Json(response))
}
