//! Internal error types for claude.ai operations.
//!
//! These errors are internal to `claudegw-provider` and are mapped to the
//! core `ProviderError` at the port boundary.

use thiserror::Error;

/// Result type alias for claude.ai operations.
pub type ClaudeAiResult<T> = Result<T, ClaudeAiError>;

/// Errors related to claude.ai API operations.
#[derive(Debug, Error)]
pub enum ClaudeAiError {
    /// API request failed with an HTTP error status.
    #[error("claude.ai request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body
        message: String,
    },

    /// The session key is past its expiry; nothing was sent.
    #[error("Session key has expired")]
    SessionExpired,

    /// The configured base URL cannot have endpoint paths appended.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
