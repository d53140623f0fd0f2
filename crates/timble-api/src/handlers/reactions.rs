//! Reaction handlers

use axum::extract::State;
use timble_service::dto::ReactRequest;
use timble_service::ReactionService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// React to another user
///
/// POST /users/@me/reactions
pub async fn react(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ReactRequest>,
) -> ApiResult<NoContent> {
    let request = request.into_domain(auth.user_id)?;
    ReactionService::new(state.service_context())
        .react(request)
        .await?;
    Ok(NoContent)
}
