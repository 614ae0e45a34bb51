//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_CACHE_CEILING;
use crate::sieve::Algorithm;

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8081;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Largest bound precomputed by the warmer and served from cache
    pub cache_ceiling: u64,
    /// Sieve used by the warmer
    pub warm_algorithm: Algorithm,
    /// Largest bound sieved live per request, uncapped when unset
    pub max_bound: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8081)
    /// - `CACHE_CEILING` - Largest cached bound (default: 10000)
    /// - `WARM_ALGORITHM` - `aitkin` or `segmented` (default: aitkin)
    /// - `MAX_BOUND` - Largest bound sieved per request (default: unset, no cap)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cache_ceiling: env::var("CACHE_CEILING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_CEILING),
            warm_algorithm: env::var("WARM_ALGORITHM")
                .map(|v| Algorithm::from_hint(&v))
                .unwrap_or_default(),
            max_bound: env::var("MAX_BOUND").ok().and_then(|v| v.parse().ok()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
            cache_ceiling: DEFAULT_CACHE_CEILING,
            warm_algorithm: Algorithm::Atkin,
            max_bound: None,
        }
    }
}
