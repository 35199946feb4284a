//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::network::{NetworkRegistry, SourceChain};
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current carrier network
    pub network: NetworkRegistry<SourceChain>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,

    /// Ranked results by snapshot version and endpoints
    pub cache: Arc<RouteCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: NetworkRegistry<SourceChain>,
        config: SearchConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            network,
            config: Arc::new(config),
            cache: Arc::new(RouteCache::new(cache_config)),
        }
    }
}
