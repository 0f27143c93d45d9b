use sqlx::PgPool;

use super::DomainError;
use crate::db::queries::{get_active_bounty, load_leaderboard_rows};
use crate::models::{
    BountySummary, LeaderboardCacheRow, LeaderboardEntry, LeaderboardResponse, ScoreBreakdown,
};

/// Turn ordered cache rows into ranked entries; rank is position + 1.
pub fn rank_rows(rows: Vec<LeaderboardCacheRow>) -> Vec<LeaderboardEntry> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| LeaderboardEntry {
            rank: index as u32 + 1,
            breakdown: ScoreBreakdown::from_json(row.breakdown.as_ref().map(|json| &json.0)),
            user_x_handle: row.user_x_handle,
            total_score: row.total_score,
        })
        .collect()
}

/// Leaderboard for the active bounty. No active bounty is a normal, empty result.
#[tracing::instrument(skip(pool))]
pub async fn load_leaderboard(pool: &PgPool) -> Result<LeaderboardResponse, DomainError> {
    let Some(bounty) = get_active_bounty(pool).await? else {
        return Ok(LeaderboardResponse::no_active_bounty());
    };

    let rows = load_leaderboard_rows(pool, bounty.id).await?;

    Ok(LeaderboardResponse {
        success: true,
        no_bounty_active: false,
        bounty: Some(BountySummary {
            id: bounty.id,
            name: bounty.name,
        }),
        leaderboard: rank_rows(rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sqlx::types::Json;

    fn row(handle: &str, score: i64, breakdown: Option<serde_json::Value>) -> LeaderboardCacheRow {
        LeaderboardCacheRow {
            user_x_handle: handle.to_string(),
            total_score: score,
            breakdown: breakdown.map(Json),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_ranks_follow_row_order() {
        let entries = rank_rows(vec![
            row("alice", 90, Some(json!({ "likes": 50, "posts": 40 }))),
            row("bob", 75, None),
            row("carol", 75, Some(json!({ "mentions": 75 }))),
        ]);

        let ranks: Vec<(u32, &str)> = entries
            .iter()
            .map(|e| (e.rank, e.user_x_handle.as_str()))
            .collect();
        assert_eq!(ranks, vec![(1, "alice"), (2, "bob"), (3, "carol")]);

        assert_eq!(entries[0].breakdown.likes, 50);
        assert_eq!(entries[0].breakdown.signups, 0);
        assert_eq!(entries[1].breakdown, ScoreBreakdown::default());
        assert_eq!(entries[2].breakdown.mentions, 75);
    }

    #[test]
    fn test_empty_rows() {
        assert!(rank_rows(Vec::new()).is_empty());
    }
}
