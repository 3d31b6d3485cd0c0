//
//  jira-fetcher
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API types shared by every [`IssueTracker`](super::IssueTracker)
//! implementation.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all remote operations
//! - [`format_api_error`] - Maps a failed HTTP response onto an [`ApiError`]
//!
//! # Example
//!
//! ```rust
//! use jira_fetcher::api::ApiError;
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(ApiError::NotFound(what)) => format!("missing: {}", what),
//!         Err(e) => e.to_string(),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all remote issue-tracker operations.
///
/// The fetcher never wraps or rewrites these; whatever the tracker returns
/// is what the caller sees.
///
/// | Variant | HTTP Status |
/// |---------|-------------|
/// | `AuthFailed` | 401 |
/// | `Forbidden` | 403 |
/// | `NotFound` | 404 |
/// | `RateLimited` | 429 |
/// | `BadRequest` | 400 |
/// | `ServerError` | 5xx |
/// | `Network` | N/A |
/// | `Unknown` | anything else |
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failed due to invalid or expired credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The requested issue or resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The authenticated user lacks permission for the operation.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The request was rejected, typically an invalid JQL query or field value.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The server failed while handling the request (HTTP 5xx).
    #[error("Server error: {0}")]
    ServerError(String),

    /// A transport-level failure: connection, TLS, timeout or body decoding.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Anything that does not fit the categories above.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Parses a Jira error response and turns it into an [`ApiError`].
///
/// Jira reports failures in the format:
/// ```json
/// {"errorMessages": ["Issue does not exist"], "errors": {"summary": "required"}}
/// ```
///
/// `errorMessages` wins when present, then the values of `errors`, then a
/// bare `message` field. If none of these can be found the raw body is used.
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            status.to_string()
        } else {
            body.trim().to_string()
        }
    });

    match status.as_u16() {
        400 => ApiError::BadRequest(message),
        401 => ApiError::AuthFailed(message),
        403 => ApiError::Forbidden(message),
        404 => ApiError::NotFound(message),
        429 => ApiError::RateLimited,
        500..=599 => ApiError::ServerError(message),
        _ => ApiError::Unknown(format!("API error ({}): {}", status, message)),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;

    let messages: Vec<&str> = json
        .get("errorMessages")
        .and_then(|m| m.as_array())
        .map(|arr| arr.iter().filter_map(|m| m.as_str()).collect())
        .unwrap_or_default();
    if !messages.is_empty() {
        return Some(messages.join("; "));
    }

    // Field errors: {"errors": {"summary": "You must specify a summary"}}
    let field_errors: Vec<String> = json
        .get("errors")
        .and_then(|e| e.as_object())
        .map(|obj| {
            obj.iter()
                .filter_map(|(field, msg)| msg.as_str().map(|m| format!("{}: {}", field, m)))
                .collect()
        })
        .unwrap_or_default();
    if !field_errors.is_empty() {
        return Some(field_errors.join("; "));
    }

    json.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
