use std::collections::HashMap;
use std::env;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EMAIL_API_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_EMAIL_FROM: &str = "NetWorth by Acepyr <hello@acepyr.com>";
pub const DEFAULT_SITE_URL: &str = "https://networth.acepyr.com";
pub const DEFAULT_VERIFICATION_TTL_HOURS: i64 = 24;
pub const DEFAULT_BATCH_SEND_DELAY_MS: u64 = 600;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DATABASE_URL or RDS_PROXY_URL must be set")]
    MissingDatabaseUrl,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to load secrets: {0}")]
    Secrets(String),
}

/// Settings for the transactional email API.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// `None` leaves the client unconfigured; every send then fails.
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub from_address: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub email: EmailConfig,
    /// Public site origin used to build verification links.
    pub site_url: String,
    /// Bearer token guarding the batch email endpoints.
    pub admin_token: Option<String>,
    pub verification_ttl: chrono::Duration,
    pub batch_send_delay: Duration,
    pub retry_recipients: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL")
            .or_else(|| get("RDS_PROXY_URL"))
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let ttl_hours = parse_or(
            "VERIFICATION_TOKEN_TTL_HOURS",
            get("VERIFICATION_TOKEN_TTL_HOURS"),
            DEFAULT_VERIFICATION_TTL_HOURS,
        )?;
        if ttl_hours <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "VERIFICATION_TOKEN_TTL_HOURS",
                value: ttl_hours.to_string(),
            });
        }
        let delay_ms = parse_or(
            "BATCH_SEND_DELAY_MS",
            get("BATCH_SEND_DELAY_MS"),
            DEFAULT_BATCH_SEND_DELAY_MS,
        )?;

        let retry_recipients = get("RETRY_EMAIL_ADDRESSES")
            .map(|raw| {
                raw.split(',')
                    .map(|addr| addr.trim().to_lowercase())
                    .filter(|addr| !addr.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            port,
            email: EmailConfig {
                api_key: get("RESEND_API_KEY"),
                api_base_url: get("EMAIL_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_EMAIL_API_BASE_URL.to_string()),
                from_address: get("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
            },
            site_url: get("SITE_URL")
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            admin_token: get("ADMIN_API_TOKEN"),
            verification_ttl: chrono::Duration::hours(ttl_hours),
            batch_send_delay: Duration::from_millis(delay_ms),
            retry_recipients,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

/// Load secrets from AWS Secrets Manager into the process environment.
///
/// Only runs when `NETWORTH_SECRETS_ARN` is set. The secret must be a JSON
/// object of string values; each pair becomes an environment variable.
/// Call this during cold start, before any request is served.
pub async fn load_secrets_from_manager() -> Result<(), ConfigError> {
    let secret_arn = match env::var("NETWORTH_SECRETS_ARN") {
        Ok(arn) => arn,
        Err(_) => {
            info!("NETWORTH_SECRETS_ARN not set, skipping secrets loading");
            return Ok(());
        }
    };

    info!("Loading secrets from AWS Secrets Manager: {}", secret_arn);

    let config = aws_config::load_from_env().await;
    let client = aws_sdk_secretsmanager::Client::new(&config);

    let response = client
        .get_secret_value()
        .secret_id(&secret_arn)
        .send()
        .await
        .map_err(|e| ConfigError::Secrets(format!("failed to fetch secret: {}", e)))?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| ConfigError::Secrets("secret does not contain a string value".to_string()))?;

    let secrets: HashMap<String, String> = serde_json::from_str(secret_string)
        .map_err(|e| ConfigError::Secrets(format!("failed to parse secret JSON: {}", e)))?;

    info!("Loaded {} secrets from Secrets Manager", secrets.len());

    for (key, value) in secrets {
        // SAFETY: runs during startup before the runtime serves requests,
        // so no other thread reads the environment concurrently.
        unsafe {
            env::set_var(&key, &value);
        }
    }

    Ok(())
}
