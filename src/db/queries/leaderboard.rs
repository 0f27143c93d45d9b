use sqlx::PgPool;
use tracing::info;

use crate::db::errors::Result;
use crate::models::LeaderboardCacheRow;

/// Load every cached leaderboard row for a bounty, best score first.
///
/// Equal scores are ordered by handle so ranks are stable between calls.
#[tracing::instrument(skip(pool))]
pub async fn load_leaderboard_rows(pool: &PgPool, bounty_event_id: i32) -> Result<Vec<LeaderboardCacheRow>> {
    let rows = sqlx::query_as::<_, LeaderboardCacheRow>(
        r#"
        SELECT
            lc.user_x_handle,
            lc.total_score,
            lc.breakdown,
            lc.updated_at
        FROM leaderboard_cache lc
        INNER JOIN bounty_events be ON be.id = lc.bounty_event_id
        WHERE be.id = $1
            AND be.active = TRUE
        ORDER BY lc.total_score DESC, lc.user_x_handle ASC
        "#,
    )
    .bind(bounty_event_id)
    .fetch_all(pool)
    .await?;

    info!("Loaded {} leaderboard rows", rows.len());
    Ok(rows)
}
