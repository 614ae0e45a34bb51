//! Request DTOs for the prime server API
//!
//! Defines the structure of incoming request path parameters.

use serde::Deserialize;

use crate::sieve::Algorithm;

/// Path parameters for `GET /primes/:algorithm/:bound`
/// and `GET /primes/xml/:algorithm/:bound`.
///
/// Both segments are kept as raw text: the bound is validated by the
/// policy layer and the algorithm hint falls back to the default.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimePath {
    /// Algorithm hint (`aitkin` or `segmented`)
    pub algorithm: String,
    /// Requested upper bound, unvalidated
    pub bound: String,
}

impl PrimePath {
    /// Resolves the free-form hint into one of the known sieves.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from_hint(&self.algorithm)
    }
}
