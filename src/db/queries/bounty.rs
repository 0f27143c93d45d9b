use sqlx::PgPool;
use tracing::debug;

use crate::db::errors::Result;
use crate::models::BountyEvent;

/// Load the active bounty event, if any.
///
/// Activation is owned elsewhere; should more than one row be active the
/// most recently created one wins.
#[tracing::instrument(skip(pool))]
pub async fn get_active_bounty(pool: &PgPool) -> Result<Option<BountyEvent>> {
    let bounty = sqlx::query_as::<_, BountyEvent>(
        r#"
        SELECT id, name, active
        FROM bounty_events
        WHERE active = TRUE
        ORDER BY id DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    debug!(found = bounty.is_some(), "Looked up active bounty");
    Ok(bounty)
}
