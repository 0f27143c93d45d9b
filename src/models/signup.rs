use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `beta_signups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SignupRecord {
    pub id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub verification_token: Option<String>,
    pub token_expires_at: Option<DateTime<Utc>>,
    pub verified: bool,
}
