use std::time::Duration;

use sqlx::PgPool;
use tracing::{info, warn};

use super::DomainError;
use crate::config::AppConfig;
use crate::db::queries::{list_all_signups, list_signups_by_emails};
use crate::email::{templates, EmailMessage, EmailSender};
use crate::models::SignupRecord;

/// Result of one sequential batch. Failures are listed in send order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub sent: usize,
    pub failed_emails: Vec<String>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failed_emails.len()
    }
}

/// Send one email per recipient, one at a time, pausing `delay` between sends.
///
/// A failed send is recorded and the batch moves on. Nothing is retried.
pub async fn send_sequentially<F>(
    sender: &dyn EmailSender,
    recipients: &[SignupRecord],
    delay: Duration,
    build: F,
) -> BatchReport
where
    F: Fn(&SignupRecord) -> EmailMessage,
{
    let mut report = BatchReport::default();

    for (index, recipient) in recipients.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        report.attempted += 1;
        match sender.send(&build(recipient)).await {
            Ok(()) => report.sent += 1,
            Err(e) => {
                warn!(email = %recipient.email, error = %e, "Batch email failed");
                report.failed_emails.push(recipient.email.clone());
            }
        }
    }

    info!(
        attempted = report.attempted,
        sent = report.sent,
        failed = report.failed(),
        "Batch send finished"
    );
    report
}

/// Send the welcome email to every signup.
#[tracing::instrument(skip_all)]
pub async fn send_bulk_emails(
    pool: &PgPool,
    sender: &dyn EmailSender,
    config: &AppConfig,
) -> Result<BatchReport, DomainError> {
    let recipients = list_all_signups(pool).await?;
    Ok(send_welcome_batch(sender, config, &recipients).await)
}

/// Resend the welcome email to the configured list of addresses that failed before.
#[tracing::instrument(skip_all, fields(configured = config.retry_recipients.len()))]
pub async fn retry_failed_emails(
    pool: &PgPool,
    sender: &dyn EmailSender,
    config: &AppConfig,
) -> Result<BatchReport, DomainError> {
    let recipients = list_signups_by_emails(pool, &config.retry_recipients).await?;
    Ok(send_welcome_batch(sender, config, &recipients).await)
}

async fn send_welcome_batch(
    sender: &dyn EmailSender,
    config: &AppConfig,
    recipients: &[SignupRecord],
) -> BatchReport {
    send_sequentially(sender, recipients, config.batch_send_delay, |signup| {
        templates::welcome_email(&config.email.from_address, &config.site_url, signup)
    })
    .await
}
