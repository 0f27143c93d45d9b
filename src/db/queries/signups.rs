use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::errors::{DatabaseError, Result};
use crate::models::SignupRecord;

const SIGNUP_COLUMNS: &str =
    "id, email, created_at, verification_token, token_expires_at, verified";

/// Insert a new beta signup carrying a fresh verification token.
#[tracing::instrument(skip(pool, verification_token), fields(email = %email))]
pub async fn insert_signup(
    pool: &PgPool,
    email: &str,
    verification_token: &str,
    token_expires_at: DateTime<Utc>,
) -> Result<SignupRecord> {
    let record = sqlx::query_as::<_, SignupRecord>(&format!(
        r#"
        INSERT INTO beta_signups (email, created_at, verification_token, token_expires_at, verified)
        VALUES ($1, NOW(), $2, $3, FALSE)
        RETURNING {SIGNUP_COLUMNS}
        "#
    ))
    .bind(email)
    .bind(verification_token)
    .bind(token_expires_at)
    .fetch_one(pool)
    .await?;

    info!(signup_id = record.id, "Inserted beta signup");
    Ok(record)
}

#[tracing::instrument(skip(pool, token))]
pub async fn find_signup_by_token(pool: &PgPool, token: &str) -> Result<Option<SignupRecord>> {
    let record = sqlx::query_as::<_, SignupRecord>(&format!(
        "SELECT {SIGNUP_COLUMNS} FROM beta_signups WHERE verification_token = $1 LIMIT 1"
    ))
    .bind(token)
    .fetch_optional(pool)
    .await?;

    debug!(found = record.is_some(), "Looked up signup by verification token");
    Ok(record)
}

/// Mark a signup verified and invalidate its token.
#[tracing::instrument(skip(pool))]
pub async fn mark_verified(pool: &PgPool, signup_id: i32) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE beta_signups
        SET verified = TRUE,
            verification_token = NULL,
            token_expires_at = NULL
        WHERE id = $1
        "#,
    )
    .bind(signup_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound(format!("beta signup {}", signup_id)));
    }

    info!(signup_id, "Marked signup verified");
    Ok(())
}

/// Every signup, oldest first.
#[tracing::instrument(skip(pool))]
pub async fn list_all_signups(pool: &PgPool) -> Result<Vec<SignupRecord>> {
    let records = sqlx::query_as::<_, SignupRecord>(&format!(
        "SELECT {SIGNUP_COLUMNS} FROM beta_signups ORDER BY created_at ASC, id ASC"
    ))
    .fetch_all(pool)
    .await?;

    info!("Loaded {} signups", records.len());
    Ok(records)
}

/// Signups whose email is in `emails` (compared case-insensitively), oldest first.
#[tracing::instrument(skip(pool, emails), fields(requested = emails.len()))]
pub async fn list_signups_by_emails(pool: &PgPool, emails: &[String]) -> Result<Vec<SignupRecord>> {
    if emails.is_empty() {
        return Ok(Vec::new());
    }

    let records = sqlx::query_as::<_, SignupRecord>(&format!(
        "SELECT {SIGNUP_COLUMNS} FROM beta_signups WHERE LOWER(email) = ANY($1) ORDER BY created_at ASC, id ASC"
    ))
    .bind(emails)
    .fetch_all(pool)
    .await?;

    info!("Matched {} of {} requested signups", records.len(), emails.len());
    Ok(records)
}
