//! Cache Store Module
//!
//! HashMap keyed by bound, filled once by the warmer and read by every
//! request. Entries are never invalidated or evicted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::cache::CacheStats;
use crate::error::{PrimeError, Result};
use crate::models::PrimeResult;

// == Prime Cache ==
/// Precomputed prime lists for bounds `1..=ceiling`.
///
/// Reads take `&self` so a shared lock is enough to serve them; hit and
/// miss counters are atomic for that reason.
#[derive(Debug)]
pub struct PrimeCache {
    /// Bound to prime list storage
    entries: HashMap<u64, PrimeResult>,
    /// Largest bound accepted by `put`
    ceiling: u64,
    /// Set once the warmer has visited every bound
    warm_complete: bool,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PrimeCache {
    // == Constructor ==
    /// Creates an empty cache holding bounds up to `ceiling`.
    pub fn new(ceiling: u64) -> Self {
        Self {
            entries: HashMap::new(),
            ceiling,
            warm_complete: false,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    // == Get ==
    /// Returns the stored result for `bound`, if any.
    ///
    /// Never computes a missing entry.
    pub fn get(&self, bound: u64) -> Option<PrimeResult> {
        match self.entries.get(&bound) {
            Some(result) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(result.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    // == Put ==
    /// Stores `result` under `bound`, replacing any previous entry.
    ///
    /// Rejects bounds outside `1..=ceiling` and results computed for a
    /// different bound.
    pub fn put(&mut self, bound: u64, result: PrimeResult) -> Result<()> {
        if bound == 0 || bound > self.ceiling {
            return Err(PrimeError::CacheRejected(format!(
                "bound {} outside cache range 1..={}",
                bound, self.ceiling
            )));
        }

        if result.initial != bound.to_string() {
            return Err(PrimeError::CacheRejected(format!(
                "result for {} stored under bound {}",
                result.initial, bound
            )));
        }

        self.entries.insert(bound, result);
        Ok(())
    }

    // == Warm State ==
    /// Records that the warmer has finished.
    pub fn mark_warm(&mut self) {
        self.warm_complete = true;
    }

    /// Returns true once the warmer has finished.
    pub fn is_warm(&self) -> bool {
        self.warm_complete
    }

    // == Ceiling ==
    /// Largest bound this cache may hold.
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            total_entries: self.entries.len(),
            ceiling: self.ceiling,
            warm_complete: self.warm_complete,
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
