//! Request Policy
//!
//! Decides whether a request is answered from the prime cache or sieved
//! live, and with which algorithm.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::PrimeCache;
use crate::error::{PrimeError, Result};
use crate::models::PrimeResult;
use crate::sieve::Algorithm;

// == Bound Parsing ==
/// Parses request text into a bound.
///
/// Accepts ASCII decimal digits only: no sign, no whitespace, no empty
/// text, and the value must fit in a `u64`. Leading zeros are allowed.
pub fn parse_bound(text: &str) -> Result<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PrimeError::InvalidBound(format!(
            "'{}' is not a non-negative integer",
            text
        )));
    }

    text.parse::<u64>()
        .map_err(|e| PrimeError::InvalidBound(format!("'{}': {}", text, e)))
}

// == Prime Service ==
/// Routes prime requests to the cache or a sieve.
#[derive(Clone)]
pub struct PrimeService {
    cache: Arc<RwLock<PrimeCache>>,
    /// Copied from the cache so reads and warming agree on the range
    ceiling: u64,
    /// Optional cap on live sieving; unset means no cap
    max_bound: Option<u64>,
}

impl PrimeService {
    /// Wraps `cache` for shared use. When `max_bound` is set, bounds above
    /// it are refused rather than sieved.
    pub fn new(cache: PrimeCache, max_bound: Option<u64>) -> Self {
        let ceiling = cache.ceiling();
        Self {
            cache: Arc::new(RwLock::new(cache)),
            ceiling,
            max_bound,
        }
    }

    /// Shared handle to the cache, for the warmer and stats.
    pub fn cache(&self) -> Arc<RwLock<PrimeCache>> {
        self.cache.clone()
    }

    /// Largest bound answered from the cache.
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Lists the primes up to `bound_text`.
    ///
    /// Bounds within the ceiling are served from the cache when present
    /// and otherwise sieved with `algorithm`. Bounds above the ceiling
    /// always use the Atkin sieve and never touch the cache.
    pub async fn resolve(&self, bound_text: &str, algorithm: Algorithm) -> Result<PrimeResult> {
        let bound = parse_bound(bound_text)?;

        if bound > self.ceiling {
            return self.compute(bound, Algorithm::Atkin).await;
        }

        if let Some(result) = self.cache.read().await.get(bound) {
            debug!(bound, "Cache hit");
            return Ok(result);
        }

        self.compute(bound, algorithm).await
    }

    /// Checks `bound` against the configured live sieve cap.
    pub fn check_limit(&self, bound: u64) -> Result<()> {
        match self.max_bound {
            Some(limit) if bound > limit => Err(PrimeError::ResourceExhausted(format!(
                "bound {} exceeds the live sieve limit of {}",
                bound, limit
            ))),
            _ => Ok(()),
        }
    }

    async fn compute(&self, bound: u64, algorithm: Algorithm) -> Result<PrimeResult> {
        self.check_limit(bound)?;

        debug!(bound, %algorithm, "Sieving live");
        tokio::task::spawn_blocking(move || algorithm.sieve(bound))
            .await
            .map_err(|e| PrimeError::Internal(format!("sieve task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::sieve_atkin;

    fn service_with_ceiling(ceiling: u64) -> PrimeService {
        PrimeService::new(PrimeCache::new(ceiling), None)
    }

    #[test]
    fn test_parse_bound_valid() {
        assert_eq!(parse_bound("0").unwrap(), 0);
        assert_eq!(parse_bound("15").unwrap(), 15);
        assert_eq!(parse_bound("007").unwrap(), 7);
        assert_eq!(parse_bound("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_parse_bound_invalid() {
        for text in ["", "abc", "-1", "+5", " 5", "5 ", "1.5", "18446744073709551616"] {
            assert!(
                matches!(parse_bound(text), Err(PrimeError::InvalidBound(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[tokio::test]
    async fn test_resolve_segmented_fifteen() {
        let service = service_with_ceiling(100);
        let result = service.resolve("15", Algorithm::Segmented).await.unwrap();
        assert_eq!(result.initial, "15");
        assert_eq!(result.primes, vec![2, 3, 5, 7, 11, 13]);
    }

    #[tokio::test]
    async fn test_resolve_small_bounds() {
        let service = service_with_ceiling(100);
        assert!(service.resolve("1", Algorithm::Atkin).await.unwrap().primes.is_empty());
        assert_eq!(
            service.resolve("2", Algorithm::Atkin).await.unwrap().primes,
            vec![2]
        );
    }

    #[tokio::test]
    async fn test_resolve_hundred() {
        let service = service_with_ceiling(100);
        let result = service.resolve("100", Algorithm::Atkin).await.unwrap();
        assert_eq!(result.primes.len(), 25);
        assert_eq!(result.primes.last(), Some(&97));
    }

    #[tokio::test]
    async fn test_resolve_invalid_bound() {
        let service = service_with_ceiling(100);
        let result = service.resolve("abc", Algorithm::Atkin).await;
        assert!(matches!(result, Err(PrimeError::InvalidBound(_))));
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let service = service_with_ceiling(100);
        let first = service.resolve("77", Algorithm::Segmented).await.unwrap();
        let second = service.resolve("77", Algorithm::Segmented).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resolve_prefers_cache() {
        let service = service_with_ceiling(100);
        service
            .cache()
            .write()
            .await
            .put(50, sieve_atkin(50).unwrap())
            .unwrap();

        let result = service.resolve("50", Algorithm::Segmented).await.unwrap();
        assert_eq!(result, sieve_atkin(50).unwrap());

        let stats = service.cache().read().await.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
    }

    #[tokio::test]
    async fn test_resolve_miss_does_not_populate_cache() {
        let service = service_with_ceiling(100);
        service.resolve("60", Algorithm::Atkin).await.unwrap();

        let cache = service.cache();
        let cache_guard = cache.read().await;
        assert!(cache_guard.is_empty());
        assert_eq!(cache_guard.stats().misses, 1);
    }

    #[tokio::test]
    async fn test_resolve_above_ceiling_skips_cache() {
        let service = service_with_ceiling(10);
        let result = service.resolve("30", Algorithm::Segmented).await.unwrap();
        assert_eq!(result, sieve_atkin(30).unwrap());

        let stats = service.cache().read().await.stats();
        assert_eq!(stats.hits + stats.misses, 0);
    }

    #[tokio::test]
    async fn test_resolve_refuses_bound_above_limit() {
        let service = PrimeService::new(PrimeCache::new(10), Some(1_000));
        let result = service.resolve("1001", Algorithm::Atkin).await;
        assert!(matches!(result, Err(PrimeError::ResourceExhausted(_))));
        assert!(service.resolve("1000", Algorithm::Atkin).await.is_ok());
    }

    #[test]
    fn test_no_limit_by_default() {
        let service = service_with_ceiling(10);
        assert!(service.check_limit(1_000_000_000).is_ok());
        assert!(service.check_limit(u64::MAX).is_ok());
    }

    #[tokio::test]
    async fn test_resolve_above_hundred_million() {
        let service = service_with_ceiling(10);
        let result = service.resolve("100000007", Algorithm::Segmented).await.unwrap();
        assert_eq!(result.primes.len(), 5_761_456);
        assert_eq!(result.primes.last(), Some(&100_000_007));
    }

    // Sieves a gigabyte of flags; run with `cargo test -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn test_resolve_billion_without_limit() {
        let service = service_with_ceiling(10);
        let result = service.resolve("1000000000", Algorithm::Atkin).await.unwrap();
        assert_eq!(result.primes.len(), 50_847_534);
    }

    #[tokio::test]
    async fn test_resolve_leading_zeros_canonicalized() {
        let service = service_with_ceiling(100);
        let result = service.resolve("010", Algorithm::Atkin).await.unwrap();
        assert_eq!(result.initial, "10");
        assert_eq!(result.primes, vec![2, 3, 5, 7]);
    }
}
