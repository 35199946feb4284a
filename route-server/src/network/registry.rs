//! The current network snapshot, shared across requests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::{NetworkData, NetworkSnapshot};

use super::error::NetworkError;
use super::source::{DataSource, NetworkProvider};

struct Current {
    snapshot: Arc<NetworkSnapshot>,
    version: u64,
    source: DataSource,
    loaded_at: DateTime<Utc>,
}

/// Summary of the loaded network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub source: DataSource,
    pub version: u64,
    pub loaded_at: DateTime<Utc>,
    pub ports: usize,
    pub carriers: usize,
    pub services: usize,
    pub connections: usize,
    pub inland_connections: usize,
}

/// Thread-safe holder of the current network snapshot.
///
/// Searches take an `Arc` of the snapshot and never hold the lock while
/// running, so a refresh never waits on a search and in-flight searches
/// keep the snapshot they started with. Every successful load bumps the
/// version.
pub struct NetworkRegistry<P> {
    inner: Arc<RwLock<Current>>,
    provider: Arc<P>,
    reject_malformed_services: bool,
}

impl<P> Clone for NetworkRegistry<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            provider: Arc::clone(&self.provider),
            reject_malformed_services: self.reject_malformed_services,
        }
    }
}

impl<P: NetworkProvider> NetworkRegistry<P> {
    /// Load the network for the first time.
    ///
    /// Fails only if the provider does.
    pub async fn load(provider: P, reject_malformed_services: bool) -> Result<Self, NetworkError> {
        let loaded = provider.load().await?;
        let snapshot = ingest(loaded.data, reject_malformed_services);

        let current = Current {
            snapshot: Arc::new(snapshot),
            version: 1,
            source: loaded.source,
            loaded_at: Utc::now(),
        };
        info!(source = %current.source, "Network loaded");

        Ok(Self {
            inner: Arc::new(RwLock::new(current)),
            provider: Arc::new(provider),
            reject_malformed_services,
        })
    }

    /// The current snapshot and its version.
    pub async fn snapshot(&self) -> (Arc<NetworkSnapshot>, u64) {
        let guard = self.inner.read().await;
        (Arc::clone(&guard.snapshot), guard.version)
    }

    pub async fn status(&self) -> NetworkStatus {
        let guard = self.inner.read().await;
        status_of(&guard)
    }

    /// Reload from the provider.
    ///
    /// On success, replaces the current snapshot. On failure, the existing
    /// snapshot is preserved and the error is returned.
    pub async fn refresh(&self) -> Result<NetworkStatus, NetworkError> {
        let loaded = self.provider.load().await?;
        let snapshot = Arc::new(ingest(loaded.data, self.reject_malformed_services));

        let mut guard = self.inner.write().await;
        guard.snapshot = snapshot;
        guard.version += 1;
        guard.source = loaded.source;
        guard.loaded_at = Utc::now();

        let status = status_of(&guard);
        info!(source = %status.source, version = status.version, "Network refreshed");
        Ok(status)
    }
}

fn status_of(current: &Current) -> NetworkStatus {
    let snapshot = &current.snapshot;
    NetworkStatus {
        source: current.source,
        version: current.version,
        loaded_at: current.loaded_at,
        ports: snapshot.ports().len(),
        carriers: snapshot.carriers().len(),
        services: snapshot.services().len(),
        connections: snapshot.connections().len(),
        inland_connections: snapshot.inland_connections().len(),
    }
}

/// Validate incoming data and build the snapshot.
///
/// Problems are logged; only broken leg chains can cause data to be
/// dropped, and only when `reject_malformed_services` is set.
fn ingest(mut data: NetworkData, reject_malformed_services: bool) -> NetworkSnapshot {
    if reject_malformed_services {
        for issue in data.reject_malformed_services() {
            warn!(%issue, "Rejected malformed service");
        }
    }

    let snapshot = NetworkSnapshot::from(data);
    for issue in snapshot.validate() {
        warn!(%issue, "Network data issue");
    }
    snapshot
}
