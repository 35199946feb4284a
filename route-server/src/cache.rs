//! Caching layer for route search results.
//!
//! A search is a pure function of the snapshot and its endpoints, so results
//! are keyed by (snapshot version, origin, destination). A refresh bumps the
//! version, which makes stale entries unreachable; they then age out with
//! the TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::PortId;
use crate::planner::SearchResult;

/// Cache key: (snapshot version, origin, destination).
type RouteKey = (u64, PortId, PortId);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

impl CacheConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Cache of unfiltered, ranked search results.
pub struct RouteCache {
    routes: MokaCache<RouteKey, Arc<SearchResult>>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    pub async fn get(&self, version: u64, origin: &PortId, destination: &PortId) -> Option<Arc<SearchResult>> {
        let key = (version, origin.clone(), destination.clone());
        self.routes.get(&key).await
    }

    pub async fn insert(&self, version: u64, origin: PortId, destination: PortId, result: Arc<SearchResult>) {
        self.routes.insert((version, origin, destination), result).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(pairs: usize) -> Arc<SearchResult> {
        let mut result = SearchResult::empty();
        result.pairs_evaluated = pairs;
        Arc::new(result)
    }

    fn pid(id: &str) -> PortId {
        PortId::new(id)
    }

    #[tokio::test]
    async fn hit_after_insert() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.insert(1, pid("p1"), pid("p5"), result(3)).await;

        let hit = cache.get(1, &pid("p1"), &pid("p5")).await.unwrap();
        assert_eq!(hit.pairs_evaluated, 3);
    }

    #[tokio::test]
    async fn keyed_by_direction_and_version() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.insert(1, pid("p1"), pid("p5"), result(1)).await;

        assert!(cache.get(1, &pid("p5"), &pid("p1")).await.is_none());
        assert!(cache.get(2, &pid("p1"), &pid("p5")).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.insert(1, pid("p1"), pid("p5"), result(1)).await;
        cache.invalidate_all();

        assert!(cache.get(1, &pid("p1"), &pid("p5")).await.is_none());
    }

    #[tokio::test]
    async fn entries_expire() {
        let config = CacheConfig::default().with_ttl(Duration::from_millis(50));
        let cache = RouteCache::new(&config);
        cache.insert(1, pid("p1"), pid("p5"), result(1)).await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.get(1, &pid("p1"), &pid("p5")).await.is_none());
    }
}
