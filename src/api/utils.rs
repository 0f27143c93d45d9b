//! Shared input helpers for API handlers

use axum::http::{header, HeaderMap};

/// Trim and lowercase an email, rejecting blanks and obviously malformed input.
pub fn normalize_email(raw: Option<&str>) -> Result<String, &'static str> {
    let email = raw.map(str::trim).unwrap_or_default();
    if email.is_empty() {
        return Err("Email is required");
    }
    let email = email.to_lowercase();
    if !is_valid_email(&email) {
        return Err("Invalid email address");
    }
    Ok(email)
}

/// Loose shape check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Trim an X handle and strip one leading `@`. Blank results are `None`.
pub fn normalize_handle(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let handle = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_string())
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
