//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
///
/// The union of HTTP-status failure, transport failure, and JSON-parse
/// failure. Callers only log or display the message; the variants exist so
/// the message names its cause, not for programmatic branching.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (connection refused, timeout, DNS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response carried a non-success status code.
    #[error("Request failed with status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
