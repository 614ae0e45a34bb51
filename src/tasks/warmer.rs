//! Cache Warmer Task
//!
//! Background task that fills the prime cache for every bound up to its
//! ceiling while requests are being served.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, PrimeCache};
use crate::error::Result;
use crate::models::PrimeResult;
use crate::sieve::Algorithm;

/// Bounds between two progress log lines.
pub const PROGRESS_INTERVAL: u64 = 1_000;

/// Spawns the one-shot task that warms the prime cache.
///
/// Runs on the blocking pool because sieving is CPU-bound. See
/// [`warm_range`] for the fill order and failure handling.
///
/// # Arguments
/// * `cache` - Arc<RwLock<PrimeCache>> shared reference to the cache
/// * `algorithm` - Sieve used to compute each entry
///
/// # Returns
/// A JoinHandle for the task. Aborting it has no effect once started, so
/// callers await it during shutdown instead.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(PrimeCache::new(10_000)));
/// let warm_handle = spawn_warm_task(cache.clone(), Algorithm::Atkin);
/// // Later, during shutdown:
/// join_warm_task(warm_handle, &cache).await;
/// ```
pub fn spawn_warm_task(cache: Arc<RwLock<PrimeCache>>, algorithm: Algorithm) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        info!("Starting cache warm with the {} sieve", algorithm);
        warm_range(&cache, |bound| algorithm.sieve(bound));
    })
}

/// Fills `cache` for every bound from 1 to its ceiling, in increasing order.
///
/// The write lock is held only long enough to insert each result, so
/// lookups interleave with warming. A bound whose `step` or insert fails is
/// logged and skipped. Marks the cache warm at the end and returns the
/// number of skipped bounds.
///
/// Must run outside an async context (it takes blocking locks).
pub fn warm_range<F>(cache: &RwLock<PrimeCache>, step: F) -> u64
where
    F: Fn(u64) -> Result<PrimeResult>,
{
    let ceiling = cache.blocking_read().ceiling();
    let started = Instant::now();
    let mut failures: u64 = 0;

    for bound in 1..=ceiling {
        let stored = step(bound).and_then(|result| cache.blocking_write().put(bound, result));

        if let Err(e) = stored {
            warn!(bound, error = %e, "Cache warm step failed, continuing");
            failures += 1;
        }

        if bound % PROGRESS_INTERVAL == 0 {
            debug!("Cache warm progress: {}/{}", bound, ceiling);
        }
    }

    let entries = {
        let mut cache_guard = cache.blocking_write();
        cache_guard.mark_warm();
        cache_guard.len()
    };

    info!(
        "Cache warm complete: {} entries, {} failures in {:.2?}",
        entries,
        failures,
        started.elapsed()
    );
    failures
}

/// Waits for the warmer to finish its pass and returns the final stats.
///
/// The warmer cannot be cancelled, so shutdown blocks until it completes.
/// If it is still running, logs how many bounds are cached so far.
pub async fn join_warm_task(warm_handle: JoinHandle<()>, cache: &RwLock<PrimeCache>) -> CacheStats {
    if !warm_handle.is_finished() {
        let stats = cache.read().await.stats();
        info!(
            "Waiting for cache warmer to finish: {}/{} bounds cached",
            stats.total_entries, stats.ceiling
        );
    }
    if let Err(e) = warm_handle.await {
        warn!("Cache warmer ended abnormally: {}", e);
    }
    cache.read().await.stats()
}
