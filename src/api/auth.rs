use axum::http::HeaderMap;
use constant_time_eq::constant_time_eq;
use tracing::warn;

use crate::api::error::ApiError;
use crate::api::utils::extract_bearer_token;
use crate::config::AppConfig;

/// Require the admin bearer token used by the batch email endpoints.
///
/// Fails closed: with no token configured every request is rejected.
pub fn require_admin(headers: &HeaderMap, config: &AppConfig) -> Result<(), ApiError> {
    let Some(expected) = config.admin_token.as_deref() else {
        warn!("ADMIN_API_TOKEN not configured; rejecting admin request");
        return Err(ApiError::Unauthorized("Unauthorized".to_string()));
    };

    match extract_bearer_token(headers) {
        Some(token) if constant_time_eq(token.as_bytes(), expected.as_bytes()) => Ok(()),
        Some(_) => {
            warn!("Admin request with invalid bearer token");
            Err(ApiError::Unauthorized("Unauthorized".to_string()))
        }
        None => Err(ApiError::Unauthorized("Unauthorized".to_string())),
    }
}
