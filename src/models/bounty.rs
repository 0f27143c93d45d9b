use serde::{Deserialize, Serialize};

/// Row of `bounty_events`. At most one row is expected to be active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BountyEvent {
    pub id: i32,
    pub name: String,
    pub active: bool,
}
