//! Shared HTTP plumbing for the network providers.

use crate::error::{FetchResult, ProviderError};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// HTTP client settings shared by every network provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout (seconds). An unresponsive upstream is
    /// reported as absent once this elapses.
    pub timeout_secs: u64,
    /// Connect timeout (seconds).
    pub connect_timeout_secs: u64,
    /// User-Agent header sent upstream.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 8,
            connect_timeout_secs: 4,
            user_agent: concat!("mycolookup/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Builds the shared HTTP client.
pub fn build_client(config: &HttpConfig) -> FetchResult<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()?)
}

/// Sends a request. A 404 is `Ok(None)`; other non-2xx statuses are errors.
async fn send(request: RequestBuilder) -> FetchResult<Option<Response>> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    })?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        debug!(url = %response.url(), "not found");
        return Ok(None);
    }
    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(Some(response))
}

/// Sends a request and reads the body as text.
pub(crate) async fn get_text(request: RequestBuilder) -> FetchResult<Option<String>> {
    let Some(response) = send(request).await? else {
        return Ok(None);
    };
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::Network(format!("failed to read body: {e}")))?;
    Ok(Some(body))
}

/// Sends a request and decodes the body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> FetchResult<Option<T>> {
    match get_text(request).await? {
        Some(body) => Ok(Some(serde_json::from_str(&body)?)),
        None => Ok(None),
    }
}
