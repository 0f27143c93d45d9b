pub mod resend;
pub mod templates;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use resend::ResendClient;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email API key is not configured")]
    NotConfigured,

    #[error("Email request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Email API rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A single outbound transactional email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Delivery seam for transactional email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
}
