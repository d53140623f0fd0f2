//! User handlers

use axum::{extract::State, Json};
use timble_service::dto::UserResponse;
use timble_service::UserService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get_current_user(auth.user_id).await?;
    Ok(Json(user))
}
