use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, warn};

use crate::domain::DomainError;

pub const GENERIC_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    MethodNotAllowed,
    /// 500 carrying a public message only; details belong in the logs.
    Internal(String),
    /// 500 with a short public classification alongside the message.
    InternalWithDetails { error: String, details: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::MethodNotAllowed => write!(f, "Method not allowed"),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::InternalWithDetails { error, details } => {
                write!(f, "Internal error: {} ({})", error, details)
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
            ApiError::InternalWithDetails { error, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, error, Some(details))
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

impl ApiError {
    /// Map a domain error, using `failure_message` as the public text of any 500.
    ///
    /// The underlying cause of a 500 is logged and never sent to the client.
    pub fn from_domain(err: DomainError, failure_message: &str) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Conflict(msg) => ApiError::BadRequest(msg),
            DomainError::InvalidToken | DomainError::TokenExpired => {
                ApiError::BadRequest(err.to_string())
            }
            DomainError::Database(_) | DomainError::Internal(_) => {
                error!(error = %err, "{}", failure_message);
                ApiError::Internal(failure_message.to_string())
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::from_domain(err, GENERIC_ERROR_MESSAGE)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest("Invalid request body".to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
