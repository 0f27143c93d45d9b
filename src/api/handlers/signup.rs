use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::api::utils::normalize_email;
use crate::domain;
use crate::models::{MessageResponse, SignupRequest};

pub const SIGNUP_SUCCESS_MESSAGE: &str =
    "Thanks for signing up! Check your inbox to verify your email.";

/// POST /api/signup
#[tracing::instrument(skip_all, fields(endpoint = "signup"))]
pub async fn signup_handler(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = payload?;

    let email = normalize_email(request.email.as_deref())
        .map_err(|msg| ApiError::BadRequest(msg.to_string()))?;

    let outcome = domain::register_signup(&state.pool, state.email.as_ref(), &state.config, &email)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to sign up"))?;

    info!(
        signup_id = outcome.record.id,
        email_sent = outcome.email_sent,
        "Signup stored"
    );

    Ok(Json(MessageResponse::ok(SIGNUP_SUCCESS_MESSAGE)))
}
