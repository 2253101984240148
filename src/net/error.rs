//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Failures are never retried or swallowed here; they surface to the calling
//! page, which picks a user-facing message via [`ApiError::category`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// A success response carried a body of an unexpected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A request body could not be serialized.
    #[error("could not encode request body: {0}")]
    Encode(String),

    /// Called outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Coarse grouping used to choose how an error is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Auth,
    NotFound,
    Conflict,
    Server,
    Network,
    Client,
}

impl ApiError {
    /// Build a status error from a response status and raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status { status, message: status_message(status, body) }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Status { status, .. } => match status {
                400 | 422 => ErrorCategory::Validation,
                401 | 403 => ErrorCategory::Auth,
                404 => ErrorCategory::NotFound,
                409 => ErrorCategory::Conflict,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
            Self::Decode(_) | Self::Encode(_) | Self::Unavailable => ErrorCategory::Client,
        }
    }

    /// Message suitable for display next to a form or list.
    ///
    /// Server, network and permission failures get fixed wording. Everything
    /// else carries the backend's own message, including a 401, which only
    /// reaches the user from the login form ("Invalid credentials").
    pub fn user_message(&self) -> String {
        match (self.category(), self) {
            (ErrorCategory::Network, _) => "Could not reach the server. Check your connection.".to_owned(),
            (ErrorCategory::Server, _) => "The server had a problem. Try again shortly.".to_owned(),
            (ErrorCategory::Auth, _) if !self.is_unauthorized() => "You don't have permission to do that.".to_owned(),
            (_, Self::Status { message, .. }) => message.clone(),
            (_, other) => other.to_string(),
        }
    }
}

/// Extract a human-readable message from an error response body.
///
/// Prefers a JSON `message` or `error` string, then non-empty raw text, then
/// the canonical reason for `status`.
pub fn status_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                if !text.trim().is_empty() {
                    return text.trim().to_owned();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') {
        return trimmed.to_owned();
    }
    canonical_reason(status).to_owned()
}

fn canonical_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Not signed in",
        403 => "Not allowed",
        404 => "Not found",
        409 => "Conflict",
        422 => "Invalid input",
        500..=599 => "Server error",
        _ => "Request failed",
    }
}
