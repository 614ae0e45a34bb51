//! Cache Module
//!
//! Bounded map from upper bound to its precomputed prime list.

mod stats;
mod store;


// Re-export public types
pub use stats::CacheStats;
pub use store::PrimeCache;

// == Public Constants ==
/// Default largest bound held by the cache
pub const DEFAULT_CACHE_CEILING: u64 = 10_000;
