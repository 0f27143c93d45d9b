use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use super::DomainError;
use crate::config::AppConfig;
use crate::db::queries::insert_signup;
use crate::email::{templates, EmailSender};
use crate::models::SignupRecord;

pub const DUPLICATE_SIGNUP_MESSAGE: &str = "This email is already on the waitlist";

#[derive(Debug, Clone)]
pub struct SignupOutcome {
    pub record: SignupRecord,
    /// Whether the welcome email was accepted by the email API.
    pub email_sent: bool,
}

pub fn new_verification_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Persist a signup and send the welcome email.
///
/// Once the row is stored the signup counts as successful: a failed email is
/// logged and reported through `email_sent`, never as an error.
#[tracing::instrument(skip(pool, sender, config), fields(email = %email))]
pub async fn register_signup(
    pool: &PgPool,
    sender: &dyn EmailSender,
    config: &AppConfig,
    email: &str,
) -> Result<SignupOutcome, DomainError> {
    let token = new_verification_token();
    let expires_at = Utc::now() + config.verification_ttl;

    let record = insert_signup(pool, email, &token, expires_at)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                DomainError::Conflict(DUPLICATE_SIGNUP_MESSAGE.to_string())
            } else {
                DomainError::from(e)
            }
        })?;

    let message = templates::welcome_email(&config.email.from_address, &config.site_url, &record);
    let email_sent = match sender.send(&message).await {
        Ok(()) => {
            info!(signup_id = record.id, "Welcome email sent");
            true
        }
        Err(e) => {
            warn!(signup_id = record.id, error = %e, "Welcome email failed; signup kept");
            false
        }
    };

    Ok(SignupOutcome { record, email_sent })
}
