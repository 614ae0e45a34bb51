//! API Handlers
//!
//! HTTP request handlers for each prime server endpoint.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::cache::PrimeCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, PrimePath, PrimeResult, StatsResponse};
use crate::policy::PrimeService;

/// Application state shared across all handlers.
///
/// Holds the prime service, which owns the cache behind Arc<RwLock<>>.
#[derive(Clone)]
pub struct AppState {
    /// Cache-or-sieve request policy
    pub primes: PrimeService,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: PrimeCache, max_bound: Option<u64>) -> Self {
        Self {
            primes: PrimeService::new(cache, max_bound),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes an empty cache with the configured ceiling.
    pub fn from_config(config: &Config) -> Self {
        Self::new(PrimeCache::new(config.cache_ceiling), config.max_bound)
    }
}

/// Handler for GET /primes/:algorithm/:bound
///
/// Lists every prime up to the bound as JSON.
pub async fn primes_handler(
    State(state): State<AppState>,
    Path(path): Path<PrimePath>,
) -> Result<Json<PrimeResult>> {
    let result = state.primes.resolve(&path.bound, path.algorithm()).await?;
    Ok(Json(result))
}

/// Handler for GET /primes/xml/:algorithm/:bound
///
/// Lists every prime up to the bound as XML, echoing the bound text as
/// it appeared in the request.
pub async fn primes_xml_handler(
    State(state): State<AppState>,
    Path(path): Path<PrimePath>,
) -> Result<impl IntoResponse> {
    let result = state.primes.resolve(&path.bound, path.algorithm()).await?;
    let body = result.to_xml(&path.bound);

    Ok(([(header::CONTENT_TYPE, "application/xml")], body))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.primes.cache();
    let stats = cache.read().await.stats();

    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrimeError;

    fn path(algorithm: &str, bound: &str) -> Path<PrimePath> {
        Path(PrimePath {
            algorithm: algorithm.to_string(),
            bound: bound.to_string(),
        })
    }

    #[tokio::test]
    async fn test_primes_handler() {
        let state = AppState::new(PrimeCache::new(100), Some(1_000));

        let response = primes_handler(State(state), path("segmented", "15"))
            .await
            .unwrap();
        assert_eq!(response.initial, "15");
        assert_eq!(response.primes, vec![2, 3, 5, 7, 11, 13]);
    }

    #[tokio::test]
    async fn test_primes_handler_invalid_bound() {
        let state = AppState::new(PrimeCache::new(100), Some(1_000));

        let result = primes_handler(State(state), path("aitkin", "abc")).await;
        assert!(matches!(result, Err(PrimeError::InvalidBound(_))));
    }

    #[tokio::test]
    async fn test_primes_xml_handler_invalid_bound() {
        let state = AppState::new(PrimeCache::new(100), Some(1_000));

        let result = primes_xml_handler(State(state), path("aitkin", "1e3")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::new(PrimeCache::new(100), Some(1_000));

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.ceiling, 100);
        assert!(!response.warm_complete);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_state_from_config() {
        let config = Config {
            cache_ceiling: 42,
            ..Config::default()
        };
        let state = AppState::from_config(&config);
        assert_eq!(state.primes.ceiling(), 42);
    }
}
