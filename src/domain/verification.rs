use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use super::DomainError;
use crate::db::queries::{find_signup_by_token, mark_verified};
use crate::models::SignupRecord;

/// What to do with a signup found by its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationDecision {
    Verify,
    AlreadyVerified,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    AlreadyVerified,
}

/// Decide the transition for `record` at `now`.
///
/// Verified records stay verified regardless of expiry. A record with no
/// expiry never expires.
pub fn decide(record: &SignupRecord, now: DateTime<Utc>) -> VerificationDecision {
    if record.verified {
        return VerificationDecision::AlreadyVerified;
    }
    match record.token_expires_at {
        Some(expires_at) if now > expires_at => VerificationDecision::Expired,
        _ => VerificationDecision::Verify,
    }
}

#[tracing::instrument(skip(pool, token))]
pub async fn verify_email(
    pool: &PgPool,
    token: &str,
    now: DateTime<Utc>,
) -> Result<VerificationOutcome, DomainError> {
    let record = find_signup_by_token(pool, token)
        .await?
        .ok_or(DomainError::InvalidToken)?;

    match decide(&record, now) {
        VerificationDecision::AlreadyVerified => {
            info!(signup_id = record.id, "Signup already verified");
            Ok(VerificationOutcome::AlreadyVerified)
        }
        VerificationDecision::Expired => Err(DomainError::TokenExpired),
        VerificationDecision::Verify => {
            mark_verified(pool, record.id).await?;
            Ok(VerificationOutcome::Verified)
        }
    }
}
