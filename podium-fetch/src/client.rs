//! HTTP client abstractions.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Fetch Trait
// ============================================================================

/// Fetches a JSON document by path relative to a fixed API base.
///
/// This is the seam between the report pipeline and the network. The path
/// is already fully assembled by the caller and may carry query parameters.
#[async_trait]
pub trait JsonFetch: Send + Sync {
    /// Fetches and parses the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, a non-success HTTP
    /// status, or a body that does not parse as JSON.
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError>;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// `reqwest`-backed [`JsonFetch`] implementation.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for the given API base URL with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the underlying client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("podium/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { inner, base_url })
    }

    /// Joins the base URL with a relative path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl JsonFetch for HttpClient {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.endpoint(path);
        debug!(url = %url, "Making GET request");

        let response = self.inner.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Request failed");
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
