use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{EmailError, EmailMessage, EmailSender};
use crate::config::EmailConfig;

/// Client for the Resend HTTP API (`POST /emails`).
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl ResendClient {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    #[tracing::instrument(skip(self, message), fields(to = ?message.to, subject = %message.subject))]
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let api_key = self.api_key.as_deref().ok_or(EmailError::NotConfigured)?;

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Email API rejected message");
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Email accepted by API");
        Ok(())
    }
}
