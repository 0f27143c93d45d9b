use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::domain::{self, VerificationOutcome};
use crate::models::{MessageResponse, VerifyQuery};

/// GET /api/verify?token=...
#[tracing::instrument(skip_all, fields(endpoint = "verify"))]
pub async fn verify_handler(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let token = query
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Verification token is required".to_string()))?;

    let outcome = domain::verify_email(&state.pool, token, Utc::now())
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to verify email"))?;

    let message = match outcome {
        VerificationOutcome::Verified => "Email verified successfully",
        VerificationOutcome::AlreadyVerified => "Email already verified",
    };

    Ok(Json(MessageResponse::ok(message)))
}
