use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `community_joins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommunityJoin {
    pub id: i32,
    pub user_x_handle: String,
    pub referrer_x_handle: Option<String>,
    pub bounty_event_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Normalized values ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommunityJoin {
    pub user_x_handle: String,
    pub referrer_x_handle: Option<String>,
    pub bounty_event_id: Option<i32>,
}
