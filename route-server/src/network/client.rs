//! REST client for the network API.

use std::time::Duration;

use crate::domain::NetworkData;

use super::error::NetworkError;

/// Configuration for the network API client.
#[derive(Debug, Clone)]
pub struct NetworkClientConfig {
    /// Base URL, e.g. `http://localhost:3001/api`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NetworkClientConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 10,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the network API.
///
/// The API serves the whole network in one document at `{base}/init`.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    http: reqwest::Client,
    base_url: String,
}

impl NetworkClient {
    /// Create a new client.
    pub fn new(config: NetworkClientConfig) -> Result<Self, NetworkError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(NetworkError::NotConfigured("network API base URL".into()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full network.
    pub async fn fetch_network(&self) -> Result<NetworkData, NetworkError> {
        let url = format!("{}/init", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_network(&body)
    }
}

/// Parse a network document.
pub(crate) fn parse_network(body: &str) -> Result<NetworkData, NetworkError> {
    serde_json::from_str(body).map_err(|e| NetworkError::Json {
        message: e.to_string(),
    })
}
