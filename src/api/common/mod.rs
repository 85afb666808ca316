//
//  project-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Projects service
//!
//! This module provides shared types and utilities used by every endpoint
//! group. It includes error handling, the response wrapper returned by the
//! client, and data structures that appear in more than one payload.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`DetailedResponse`] - Status, headers and typed result of one call
//! - [`PaginationLink`] - `first`/`last`/`previous`/`next` link objects
//! - [`JsonPatchOperation`] - RFC 6902 patch operations used by update calls
//! - Pagination types (re-exported from the [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use project_sdk::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthFailed(msg)) => println!("Check your credentials: {}", msg),
//!         Err(ApiError::NotFound(resource)) => println!("Resource not found: {}", resource),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Convenience alias used by every client operation.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the Projects API.
///
/// HTTP failures are classified by status code so callers can branch on
/// the common cases without inspecting raw numbers. Anything that does not
/// have a dedicated variant ends up in [`ApiError::Status`].
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns the HTTP status code carried by this error, if any.
    ///
    /// # Returns
    ///
    /// `Some(code)` for errors produced from a non-success response, and for
    /// network errors that still carry a status. `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::AuthFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            Self::RateLimited(_) => Some(429),
            Self::ServerError { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Reports whether the failed call may succeed if sent again.
    ///
    /// Rate limiting, 5xx responses and connection/timeout failures are
    /// retryable. Client errors and local failures never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) | Self::ServerError { .. } => true,
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Builds an [`ApiError`] from a non-success status and its response body.
///
/// The service reports failures as `{"errors": [{"message": "..."}]}`, but
/// proxies and gateways in front of it use a handful of other shapes. The
/// first non-empty message found is used. Otherwise the raw body is used,
/// or the canonical status reason when the body is empty.
///
/// # Parameters
///
/// * `status` - The HTTP status of the response
/// * `body` - The raw response body
///
/// # Returns
///
/// The classified error.
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            trimmed.to_string()
        }
    });

    match status.as_u16() {
        400 => ApiError::BadRequest(message),
        401 => ApiError::AuthFailed(message),
        403 => ApiError::Forbidden(message),
        404 => ApiError::NotFound(message),
        429 => ApiError::RateLimited(message),
        code @ 500..=599 => ApiError::ServerError {
            status: code,
            message,
        },
        code => ApiError::Status {
            status: code,
            message,
        },
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;

    let candidates = [
        // Service format: {"errors": [{"message": "..."}]}
        json.get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message")),
        // Gateway format: {"error": {"message": "..."}}
        json.get("error").and_then(|e| e.get("message")),
        // {"error": "..."}
        json.get("error"),
        json.get("message"),
        json.get("description"),
    ];

    let message = candidates
        .into_iter()
        .flatten()
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(String::from);
    message
}

/// Status, headers and typed result of a single API call.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status_code: u16,

    pub headers: HeaderMap,

    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Discards the transport details and keeps the typed result.
    pub fn into_result(self) -> T {
        self.result
    }
}

/// A link to a page of a paginated listing.
///
/// `start` is the opaque cursor to pass back as the `start` query parameter
/// to fetch that page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationLink {
    pub href: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// RFC 6902 operation names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPatchOp {
    Add,
    Copy,
    Move,
    Remove,
    Replace,
    Test,
}

/// A single JSON patch operation, as accepted by the `update_*` calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    pub op: JsonPatchOp,

    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl JsonPatchOperation {
    /// Creates an operation without `from` or `value`.
    pub fn new(op: JsonPatchOp, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
            from: None,
            value: None,
        }
    }

    /// Shorthand for a `replace` operation carrying `value`.
    pub fn replace(path: impl Into<String>, value: serde_json::Value) -> Self {
        Self::new(JsonPatchOp::Replace, path).with_value(value)
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// `skip_serializing_if` predicate for borrowed slice fields.
pub(crate) fn is_empty_slice<T>(values: &&[T]) -> bool {
    values.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_api_error_service_shape() {
        let body = r#"{"errors": [{"code": "not_found", "message": "project xyz not found"}], "status_code": 404}"#;
        let err = format_api_error(StatusCode::NOT_FOUND, body);
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "project xyz not found"));
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_format_api_error_fallbacks() {
        let err = format_api_error(StatusCode::BAD_REQUEST, r#"{"error": "bad limit"}"#);
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "bad limit"));

        let err = format_api_error(StatusCode::UNAUTHORIZED, r#"{"error": {"message": "expired"}}"#);
        assert!(matches!(err, ApiError::AuthFailed(ref m) if m == "expired"));

        let err = format_api_error(StatusCode::IM_A_TEAPOT, "plain text");
        assert!(matches!(err, ApiError::Status { status: 418, ref message } if message == "plain text"));

        let err = format_api_error(StatusCode::SERVICE_UNAVAILABLE, "");
        assert!(matches!(err, ApiError::ServerError { status: 503, ref message } if message == "Service Unavailable"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(format_api_error(StatusCode::TOO_MANY_REQUESTS, "").is_retryable());
        assert!(format_api_error(StatusCode::BAD_GATEWAY, "").is_retryable());
        assert!(!format_api_error(StatusCode::NOT_FOUND, "").is_retryable());
        assert!(!ApiError::InvalidArgument("x".into()).is_retryable());
    }

    #[test]
    fn test_json_patch_serialization() {
        let op = JsonPatchOperation::replace("/name", serde_json::json!("renamed"));
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"op": "replace", "path": "/name", "value": "renamed"})
        );

        let op = JsonPatchOperation::new(JsonPatchOp::Move, "/b").with_from("/a");
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json, serde_json::json!({"op": "move", "path": "/b", "from": "/a"}));
    }
}
