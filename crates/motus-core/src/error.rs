//! Error types for the motus client.
//!
//! This module provides a unified error type with explicit variants for
//! request failures, credential storage, and input validation.

use thiserror::Error;

/// Fallback message when an error envelope carries no usable text.
pub const REQUEST_FAILED: &str = "Request failed";

/// Fallback snippet when a non-JSON response body is empty.
pub const INVALID_RESPONSE_FORMAT: &str = "Invalid response format";

/// Maximum response-text characters quoted in a non-JSON error message.
pub const SNIPPET_CHARS: usize = 100;

/// The unified error type for motus operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// A request failed (transport, bad response, or server error).
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Credential storage failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Input validation errors (invalid base URL, endpoint format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// A failed API request.
///
/// Every failure carries a human-readable message, available through
/// `Display`. The message is never empty: each constructor falls back
/// to a fixed default when the server provides no usable text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, timeout).
    #[error("Network error. Please check if server is running.")]
    Network {
        /// Underlying transport failure, kept for diagnostics only.
        detail: String,
    },

    /// The response was not JSON; an intermediary likely answered in
    /// place of the API (HTML gateway error pages and the like).
    #[error("Server error: {snippet}")]
    NonJsonResponse {
        /// HTTP status of the response.
        status: u16,
        /// At most the first [`SNIPPET_CHARS`] characters of the body.
        snippet: String,
    },

    /// The server returned a JSON error envelope with a failure status.
    #[error("{message}")]
    Server {
        /// HTTP status of the response.
        status: u16,
        /// Message extracted from the envelope, never empty.
        message: String,
    },

    /// The body claimed to be JSON but did not parse.
    #[error("malformed response body: {detail}")]
    MalformedBody { detail: String },
}

impl ApiError {
    /// Transport-level failure. The display text is fixed; `detail`
    /// records the underlying cause for logs.
    pub fn network(detail: impl Into<String>) -> Self {
        ApiError::Network {
            detail: detail.into(),
        }
    }

    /// Non-JSON response. Quotes at most the first [`SNIPPET_CHARS`]
    /// characters of `body`, or a fixed fallback when the body is empty.
    pub fn non_json(status: u16, body: &str) -> Self {
        let snippet: String = body.chars().take(SNIPPET_CHARS).collect();
        let snippet = if snippet.is_empty() {
            INVALID_RESPONSE_FORMAT.to_string()
        } else {
            snippet
        };
        ApiError::NonJsonResponse { status, snippet }
    }

    /// Error envelope with a failure status. Picks the `error` field,
    /// then `message`, then [`REQUEST_FAILED`]; empty strings are
    /// treated as absent.
    pub fn server(status: u16, error: Option<String>, message: Option<String>) -> Self {
        let message = error
            .filter(|m| !m.is_empty())
            .or(message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| REQUEST_FAILED.to_string());
        ApiError::Server { status, message }
    }

    /// JSON parse failure on a response that declared a JSON content type.
    pub fn malformed(detail: impl Into<String>) -> Self {
        ApiError::MalformedBody {
            detail: detail.into(),
        }
    }

    /// The human-readable message for this failure. Never empty.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this failure indicates a rejected or expired session.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Server { status: 401, .. })
    }
}

/// Credential storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the user profile failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid endpoint path.
    #[error("invalid endpoint '{value}': {reason}")]
    Endpoint { value: String, reason: String },
}
