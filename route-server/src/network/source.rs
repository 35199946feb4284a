//! Network sources and the fallback chain.
//!
//! A [`NetworkProvider`] returns the carrier network plus the source it came
//! from. [`SourceChain`] tries the network API, then a JSON file, then the
//! built-in defaults, stopping at the first that succeeds.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::NetworkData;

use super::client::{NetworkClient, NetworkClientConfig, parse_network};
use super::defaults::default_network;
use super::error::NetworkError;

/// Where a network snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Api,
    File,
    Defaults,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::Api => "api",
            DataSource::File => "file",
            DataSource::Defaults => "defaults",
        };
        f.write_str(name)
    }
}

/// Network data together with its source.
#[derive(Debug, Clone)]
pub struct LoadedNetwork {
    pub source: DataSource,
    pub data: NetworkData,
}

/// Supplies the carrier network.
///
/// Implementations may do IO; the route search never calls them directly.
pub trait NetworkProvider: Send + Sync + 'static {
    fn load(&self) -> impl Future<Output = Result<LoadedNetwork, NetworkError>> + Send;
}

/// Configuration for loading the network.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Base URL of the network API; skipped when unset
    pub api_url: Option<String>,
    /// JSON network file; skipped when unset
    pub file: Option<PathBuf>,
    /// API request timeout in seconds
    pub timeout_secs: u64,
    /// Drop services whose legs don't chain instead of only warning
    pub reject_malformed_services: bool,
    /// How often to reload in the background; never when unset
    pub refresh_interval: Option<Duration>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            file: None,
            timeout_secs: 10,
            reject_malformed_services: false,
            refresh_interval: None,
        }
    }
}

impl NetworkConfig {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_reject_malformed_services(mut self, reject: bool) -> Self {
        self.reject_malformed_services = reject;
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = Some(interval);
        self
    }
}

/// A single place the network can be loaded from.
#[derive(Debug, Clone)]
pub enum NetworkSource {
    Api(NetworkClient),
    File(PathBuf),
    Defaults,
}

impl NetworkSource {
    pub fn kind(&self) -> DataSource {
        match self {
            NetworkSource::Api(_) => DataSource::Api,
            NetworkSource::File(_) => DataSource::File,
            NetworkSource::Defaults => DataSource::Defaults,
        }
    }

    async fn fetch(&self) -> Result<NetworkData, NetworkError> {
        match self {
            NetworkSource::Api(client) => client.fetch_network().await,
            NetworkSource::File(path) => {
                let body = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| NetworkError::Io {
                        path: path.clone(),
                        source,
                    })?;
                parse_network(&body)
            }
            NetworkSource::Defaults => Ok(default_network()),
        }
    }
}

/// Ordered list of sources; the first to succeed wins.
#[derive(Debug, Clone)]
pub struct SourceChain {
    sources: Vec<NetworkSource>,
}

impl SourceChain {
    pub fn new(sources: Vec<NetworkSource>) -> Self {
        Self { sources }
    }

    /// API (if configured), then file (if configured), then defaults.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        let mut sources = Vec::new();

        if let Some(url) = &config.api_url {
            let client_config = NetworkClientConfig::new(url).with_timeout_secs(config.timeout_secs);
            sources.push(NetworkSource::Api(NetworkClient::new(client_config)?));
        }
        if let Some(path) = &config.file {
            sources.push(NetworkSource::File(path.clone()));
        }
        sources.push(NetworkSource::Defaults);

        Ok(Self::new(sources))
    }

    pub fn sources(&self) -> &[NetworkSource] {
        &self.sources
    }
}

impl NetworkProvider for SourceChain {
    async fn load(&self) -> Result<LoadedNetwork, NetworkError> {
        for source in &self.sources {
            match source.fetch().await {
                Ok(data) => {
                    debug!(source = %source.kind(), ports = data.ports.len(), "Loaded network");
                    return Ok(LoadedNetwork {
                        source: source.kind(),
                        data,
                    });
                }
                Err(e) => warn!(source = %source.kind(), error = %e, "Network source failed, trying next"),
            }
        }
        Err(NetworkError::Exhausted)
    }
}
