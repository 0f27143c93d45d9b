use sqlx::PgPool;
use tracing::info;

use crate::db::errors::Result;
use crate::models::{CommunityJoin, NewCommunityJoin};

/// Insert a community join. A repeated handle surfaces as a unique violation.
#[tracing::instrument(skip(pool), fields(handle = %join.user_x_handle))]
pub async fn insert_community_join(pool: &PgPool, join: &NewCommunityJoin) -> Result<CommunityJoin> {
    let row = sqlx::query_as::<_, CommunityJoin>(
        r#"
        INSERT INTO community_joins (user_x_handle, referrer_x_handle, bounty_event_id, created_at)
        VALUES ($1, $2, $3, NOW())
        RETURNING id, user_x_handle, referrer_x_handle, bounty_event_id, created_at
        "#,
    )
    .bind(&join.user_x_handle)
    .bind(&join.referrer_x_handle)
    .bind(join.bounty_event_id)
    .fetch_one(pool)
    .await?;

    info!(join_id = row.id, "Inserted community join");
    Ok(row)
}
