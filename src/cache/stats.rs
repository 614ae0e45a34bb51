//! Cache Statistics Module
//!
//! Point-in-time view of cache usage and warm progress.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups within the ceiling that found no entry
    pub misses: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Largest bound the cache may hold
    pub ceiling: u64,
    /// Whether the warmer has finished its pass
    pub warm_complete: bool,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Fill Ratio ==
    /// Fraction of the bounds `1..=ceiling` currently cached.
    pub fn fill_ratio(&self) -> f64 {
        if self.ceiling == 0 {
            1.0
        } else {
            self.total_entries as f64 / self.ceiling as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.total_entries, 0);
        assert!(!stats.warm_complete);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            ..Default::default()
        };
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_fill_ratio() {
        let stats = CacheStats {
            total_entries: 25,
            ceiling: 100,
            ..Default::default()
        };
        assert_eq!(stats.fill_ratio(), 0.25);
    }

    #[test]
    fn test_fill_ratio_zero_ceiling() {
        assert_eq!(CacheStats::default().fill_ratio(), 1.0);
    }
}
