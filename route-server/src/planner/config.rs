//! Search configuration for the route planner.

use std::time::Duration;

/// Handling buffer added at a transshipment interchange (days).
pub const DEFAULT_HANDLING_BUFFER_DAYS: u32 = 3;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Days added for customs and dwell at an interchange port.
    pub handling_buffer_days: u32,

    /// Collapse inland links that reach the same gateway by the same mode,
    /// keeping the fastest. Off by default: every link is evaluated.
    pub dedupe_gateways: bool,

    /// Also try each connection with service B feeding service A.
    /// Off by default: service A always feeds service B.
    pub bidirectional_connections: bool,

    /// Maximum number of routes to return after ranking.
    pub max_results: Option<usize>,

    /// How long a search may run before it is abandoned (milliseconds).
    pub timeout_ms: u64,
}

impl SearchConfig {
    /// Set the interchange handling buffer.
    pub fn with_handling_buffer(mut self, days: u32) -> Self {
        self.handling_buffer_days = days;
        self
    }

    /// Enable or disable gateway deduplication.
    pub fn with_dedupe_gateways(mut self, dedupe: bool) -> Self {
        self.dedupe_gateways = dedupe;
        self
    }

    /// Enable or disable reverse use of transshipment connections.
    pub fn with_bidirectional_connections(mut self, bidirectional: bool) -> Self {
        self.bidirectional_connections = bidirectional;
        self
    }

    /// Limit the number of ranked results.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Set the search timeout.
    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }

    /// Returns the search timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            handling_buffer_days: DEFAULT_HANDLING_BUFFER_DAYS,
            dedupe_gateways: false,
            bidirectional_connections: false,
            max_results: None,
            timeout_ms: 5_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.handling_buffer_days, 3);
        assert!(!config.dedupe_gateways);
        assert!(!config.bidirectional_connections);
        assert_eq!(config.max_results, None);
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn builder_methods() {
        let config = SearchConfig::default()
            .with_handling_buffer(5)
            .with_dedupe_gateways(true)
            .with_bidirectional_connections(true)
            .with_max_results(10)
            .with_timeout_ms(250);

        assert_eq!(config.handling_buffer_days, 5);
        assert!(config.dedupe_gateways);
        assert!(config.bidirectional_connections);
        assert_eq!(config.max_results, Some(10));
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }
}
