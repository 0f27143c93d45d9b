use sqlx::PgPool;
use tracing::info;

use super::DomainError;
use crate::db::queries::{get_active_bounty, insert_community_join};
use crate::models::{CommunityJoin, NewCommunityJoin};

pub const ALREADY_JOINED_MESSAGE: &str = "This X handle has already joined the community";

/// Record a community join, attributing it to the active bounty if any.
///
/// Handles must already be normalized.
#[tracing::instrument(skip(pool))]
pub async fn join_community(
    pool: &PgPool,
    user_x_handle: String,
    referrer_x_handle: Option<String>,
) -> Result<CommunityJoin, DomainError> {
    let bounty = get_active_bounty(pool).await?;

    let join = NewCommunityJoin {
        user_x_handle,
        referrer_x_handle,
        bounty_event_id: bounty.as_ref().map(|b| b.id),
    };

    let row = insert_community_join(pool, &join).await.map_err(|e| {
        if e.is_unique_violation() {
            DomainError::Conflict(ALREADY_JOINED_MESSAGE.to_string())
        } else {
            DomainError::from(e)
        }
    })?;

    info!(
        join_id = row.id,
        bounty_event_id = ?row.bounty_event_id,
        "Community join recorded"
    );
    Ok(row)
}
