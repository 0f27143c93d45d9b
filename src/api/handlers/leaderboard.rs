use axum::{extract::State, Json};
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::domain::{self, DomainError};
use crate::models::LeaderboardResponse;

/// GET /api/leaderboard
#[tracing::instrument(skip_all, fields(endpoint = "leaderboard"))]
pub async fn leaderboard_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<LeaderboardResponse>> {
    match domain::load_leaderboard(&state.pool).await {
        Ok(response) => {
            info!(
                entries = response.leaderboard.len(),
                no_bounty_active = response.no_bounty_active,
                "Leaderboard served"
            );
            Ok(Json(response))
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch leaderboard");
            let details = match e {
                DomainError::Database(_) => "database query failed",
                _ => "unexpected error",
            };
            Err(ApiError::InternalWithDetails {
                error: "Failed to fetch leaderboard".to_string(),
                details: details.to_string(),
            })
        }
    }
}
