//! Error types for the provider layer.
//!
//! These never leave a provider: [`crate::Provider::lookup`] turns every
//! error into [`mycolookup_types::ProviderResult::Absent`] after logging it.

use thiserror::Error;

/// Result type for provider fetches.
pub type FetchResult<T> = Result<T, ProviderError>;

/// Errors that can occur while fetching from an external source.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure (DNS, connect, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded its timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Non-success HTTP status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The payload did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A required access credential is not configured.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// Client construction or request building failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProviderError {
    /// Returns true if this error represents a 429 rate-limit response.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ProviderError::Status { status: 429, .. })
    }
}
