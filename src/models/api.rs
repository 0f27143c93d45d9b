use serde::{Deserialize, Serialize};

use crate::models::leaderboard::LeaderboardEntry;

// Request payloads. Required fields are optional here so that a missing
// field yields the handler's own 400 message instead of a decode failure.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityJoinRequest {
    pub user_x_handle: Option<String>,
    pub referrer_x_handle: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyQuery {
    pub token: Option<String>,
}

// Responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BountySummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub success: bool,
    pub no_bounty_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounty: Option<BountySummary>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl LeaderboardResponse {
    pub fn no_active_bounty() -> Self {
        Self {
            success: true,
            no_bounty_active: true,
            bounty: None,
            leaderboard: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSendResponse {
    pub success: bool,
    pub message: String,
    pub attempted: usize,
    pub sent: usize,
    pub failed: usize,
    pub failed_emails: Vec<String>,
}
