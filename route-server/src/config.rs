//! Server configuration from environment variables.
//!
//! | Variable                          | Default          |
//! |-----------------------------------|------------------|
//! | `ROUTE_BIND_ADDR`                 | `127.0.0.1:3000` |
//! | `ROUTE_API_URL`                   | unset            |
//! | `ROUTE_NETWORK_FILE`              | unset            |
//! | `ROUTE_REFRESH_SECS`              | unset (never)    |
//! | `ROUTE_CACHE_TTL_SECS`            | `300`            |
//! | `ROUTE_HANDLING_BUFFER_DAYS`      | `3`              |
//! | `ROUTE_DEDUPE_GATEWAYS`           | `false`          |
//! | `ROUTE_BIDIRECTIONAL_CONNECTIONS` | `false`          |
//! | `ROUTE_MAX_RESULTS`               | unset (all)      |
//! | `ROUTE_SEARCH_TIMEOUT_MS`         | `5000`           |
//! | `ROUTE_REJECT_MALFORMED`          | `false`          |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::network::NetworkConfig;
use crate::planner::SearchConfig;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub network: NetworkConfig,
    pub search: SearchConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env { lookup };

        let bind_addr = env
            .parsed("ROUTE_BIND_ADDR")?
            .unwrap_or_else(default_bind_addr);

        let mut network = NetworkConfig::default()
            .with_reject_malformed_services(env.flag("ROUTE_REJECT_MALFORMED")?);
        network.api_url = env.string("ROUTE_API_URL");
        network.file = env.string("ROUTE_NETWORK_FILE").map(Into::into);
        network.refresh_interval = env
            .parsed::<u64>("ROUTE_REFRESH_SECS")?
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs);

        let mut search = SearchConfig::default()
            .with_dedupe_gateways(env.flag("ROUTE_DEDUPE_GATEWAYS")?)
            .with_bidirectional_connections(env.flag("ROUTE_BIDIRECTIONAL_CONNECTIONS")?);
        if let Some(days) = env.parsed("ROUTE_HANDLING_BUFFER_DAYS")? {
            search = search.with_handling_buffer(days);
        }
        if let Some(max) = env.parsed("ROUTE_MAX_RESULTS")? {
            search = search.with_max_results(max);
        }
        if let Some(ms) = env.parsed("ROUTE_SEARCH_TIMEOUT_MS")? {
            search = search.with_timeout_ms(ms);
        }

        let mut cache = CacheConfig::default();
        if let Some(secs) = env.parsed("ROUTE_CACHE_TTL_SECS")? {
            cache = cache.with_ttl(Duration::from_secs(secs));
        }

        Ok(Self {
            bind_addr,
            network,
            search,
            cache,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            network: NetworkConfig::default(),
            search: SearchConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

struct Env<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Set and non-blank.
    fn string(&self, var: &str) -> Option<String> {
        (self.lookup)(var)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parsed<T>(&self, var: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.string(var)
            .map(|value| {
                value.parse().map_err(|e: T::Err| ConfigError {
                    var,
                    reason: e.to_string(),
                    value,
                })
            })
            .transpose()
    }

    fn flag(&self, var: &'static str) -> Result<bool, ConfigError> {
        let Some(value) = self.string(var) else {
            return Ok(false);
        };
        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError {
                var,
                value,
                reason: "expected true or false".into(),
            }),
        }
    }
}
