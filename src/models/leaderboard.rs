use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::types::Json;

/// Row of `leaderboard_cache`. Populated by an external scoring job.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeaderboardCacheRow {
    pub user_x_handle: String,
    pub total_score: i64,
    pub breakdown: Option<Json<JsonValue>>,
    pub updated_at: DateTime<Utc>,
}

/// Per-category point counts for one participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub signups: i64,
    pub joins: i64,
    pub mentions: i64,
    pub likes: i64,
    pub retweets: i64,
    pub comments: i64,
    pub posts: i64,
}

impl ScoreBreakdown {
    /// Read a breakdown from loosely typed JSON.
    ///
    /// Missing, null or non-numeric fields become 0. Fractional values are
    /// truncated toward zero.
    pub fn from_json(value: Option<&JsonValue>) -> Self {
        let field = |name: &str| -> i64 {
            value
                .and_then(|v| v.get(name))
                .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
                .unwrap_or(0)
        };

        Self {
            signups: field("signups"),
            joins: field("joins"),
            mentions: field("mentions"),
            likes: field("likes"),
            retweets: field("retweets"),
            comments: field("comments"),
            posts: field("posts"),
        }
    }
}

/// One ranked line of the leaderboard response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_x_handle: String,
    pub total_score: i64,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_breakdown_defaults_missing_fields() {
        let raw = json!({ "likes": 4, "posts": 2 });
        let breakdown = ScoreBreakdown::from_json(Some(&raw));

        assert_eq!(
            breakdown,
            ScoreBreakdown {
                likes: 4,
                posts: 2,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_breakdown_tolerates_bad_values() {
        let raw = json!({
            "signups": "three",
            "joins": null,
            "mentions": 2.9,
            "retweets": 7
        });
        let breakdown = ScoreBreakdown::from_json(Some(&raw));

        assert_eq!(breakdown.signups, 0);
        assert_eq!(breakdown.joins, 0);
        assert_eq!(breakdown.mentions, 2);
        assert_eq!(breakdown.retweets, 7);
    }

    #[test]
    fn test_breakdown_absent() {
        assert_eq!(ScoreBreakdown::from_json(None), ScoreBreakdown::default());
        assert_eq!(
            ScoreBreakdown::from_json(Some(&json!("not an object"))),
            ScoreBreakdown::default()
        );
    }

    #[test]
    fn test_entry_serializes_flat() {
        let entry = LeaderboardEntry {
            rank: 1,
            user_x_handle: "alice".to_string(),
            total_score: 42,
            breakdown: ScoreBreakdown {
                likes: 10,
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["rank"], 1);
        assert_eq!(value["userXHandle"], "alice");
        assert_eq!(value["totalScore"], 42);
        assert_eq!(value["likes"], 10);
        assert_eq!(value["comments"], 0);
        assert!(value.get("breakdown").is_none());
    }
}
