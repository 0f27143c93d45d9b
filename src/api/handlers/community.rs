use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::api::utils::normalize_handle;
use crate::domain;
use crate::models::{CommunityJoinRequest, MessageResponse};

/// POST /api/community-join
#[tracing::instrument(skip_all, fields(endpoint = "community_join"))]
pub async fn community_join_handler(
    State(state): State<AppState>,
    payload: Result<Json<CommunityJoinRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = payload?;

    let user_x_handle = request
        .user_x_handle
        .as_deref()
        .and_then(normalize_handle)
        .ok_or_else(|| ApiError::BadRequest("X handle is required".to_string()))?;
    let referrer_x_handle = request.referrer_x_handle.as_deref().and_then(normalize_handle);

    domain::join_community(&state.pool, user_x_handle, referrer_x_handle)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to join community"))?;

    Ok(Json(MessageResponse::ok("Successfully joined the community")))
}
