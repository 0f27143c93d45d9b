use axum::{extract::State, http::HeaderMap, Json};

use crate::api::auth::require_admin;
use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::domain::{self, BatchReport};
use crate::models::BatchSendResponse;

fn to_response(report: BatchReport) -> BatchSendResponse {
    BatchSendResponse {
        success: true,
        message: format!("Sent {} of {} emails", report.sent, report.attempted),
        attempted: report.attempted,
        sent: report.sent,
        failed: report.failed(),
        failed_emails: report.failed_emails,
    }
}

/// GET /api/send-bulk-emails
/// Authentication: admin bearer token
#[tracing::instrument(skip_all, fields(endpoint = "send_bulk_emails"))]
pub async fn send_bulk_emails_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<BatchSendResponse>> {
    require_admin(&headers, &state.config)?;

    let report = domain::send_bulk_emails(&state.pool, state.email.as_ref(), &state.config)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to send emails"))?;

    Ok(Json(to_response(report)))
}

/// GET /api/retry-failed-emails
/// Authentication: admin bearer token
#[tracing::instrument(skip_all, fields(endpoint = "retry_failed_emails"))]
pub async fn retry_failed_emails_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<BatchSendResponse>> {
    require_admin(&headers, &state.config)?;

    let report = domain::retry_failed_emails(&state.pool, state.email.as_ref(), &state.config)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to retry emails"))?;

    Ok(Json(to_response(report)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_counts() {
        let response = to_response(BatchReport {
            attempted: 4,
            sent: 3,
            failed_emails: vec!["x@example.com".to_string()],
        });

        assert_eq!(response.failed, 1);
        assert_eq!(response.sent + response.failed, response.attempted);
        assert_eq!(response.message, "Sent 3 of 4 emails");
    }
}
