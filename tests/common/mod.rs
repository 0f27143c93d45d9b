#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use networth_api::{router, AppConfig, AppState, EmailError, EmailMessage, EmailSender};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Email sender that records every message and fails for chosen recipients.
#[derive(Clone, Default)]
pub struct RecordingEmailSender {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
    failing: Arc<HashSet<String>>,
    fail_all: bool,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(addresses: &[&str]) -> Self {
        Self {
            failing: Arc::new(addresses.iter().map(|a| a.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn always_failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Every message handed to `send`, including the ones that failed.
    pub fn attempts(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(message.clone());

        let recipient = message.to.first().cloned().unwrap_or_default();
        if self.fail_all || self.failing.contains(&recipient) {
            return Err(EmailError::Rejected {
                status: 500,
                body: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

pub fn test_config(extra: &[(&str, &str)]) -> AppConfig {
    let extra: Vec<(String, String)> = extra
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    AppConfig::from_lookup(move |key| {
        if let Some((_, v)) = extra.iter().find(|(k, _)| k == key) {
            return Some(v.clone());
        }
        match key {
            "DATABASE_URL" => Some("postgres://localhost/networth_test".to_string()),
            "ADMIN_API_TOKEN" => Some(ADMIN_TOKEN.to_string()),
            "BATCH_SEND_DELAY_MS" => Some("0".to_string()),
            "SITE_URL" => Some("https://networth.test".to_string()),
            "EMAIL_FROM" => Some("beta@networth.test".to_string()),
            _ => None,
        }
    })
    .expect("test config")
}

pub fn test_app(pool: PgPool, sender: RecordingEmailSender, config: AppConfig) -> Router {
    router(AppState::new(pool, Arc::new(sender), config))
}

/// App whose pool never connects; for requests that must not reach the database.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://localhost:1/unreachable")
        .expect("lazy pool");
    test_app(pool, RecordingEmailSender::new(), test_config(&[]))
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn admin_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", format!("Bearer {}", ADMIN_TOKEN))
        .body(Body::empty())
        .unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }
}

pub async fn call(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
