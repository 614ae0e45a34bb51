//! Sieve Module
//!
//! Prime generation up to an inclusive bound. Two interchangeable
//! algorithms produce identical output: a quadratic-form (Atkin) sieve
//! over a single flag buffer, and a segmented Sieve of Eratosthenes that
//! walks the range in fixed windows.

mod atkin;
mod segmented;


use serde::Serialize;

use crate::error::{PrimeError, Result};
use crate::models::PrimeResult;

pub use atkin::sieve_atkin;
pub use segmented::{sieve_segmented, SEGMENT_SIZE};

// == Algorithm ==
/// The sieve used to answer a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Quadratic-form sieve over a buffer of `bound + 1` flags
    #[default]
    #[serde(rename = "aitkin")]
    Atkin,
    /// Segmented Sieve of Eratosthenes
    Segmented,
}

impl Algorithm {
    /// Maps a request hint onto an algorithm.
    ///
    /// Only `"segmented"` selects the segmented sieve; every other value,
    /// including `"aitkin"`, selects the default.
    pub fn from_hint(hint: &str) -> Self {
        match hint {
            "segmented" => Algorithm::Segmented,
            _ => Algorithm::Atkin,
        }
    }

    /// The hint text that selects this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Atkin => "aitkin",
            Algorithm::Segmented => "segmented",
        }
    }

    /// Lists every prime up to and including `bound`.
    pub fn sieve(self, bound: u64) -> Result<PrimeResult> {
        match self {
            Algorithm::Atkin => sieve_atkin(bound),
            Algorithm::Segmented => sieve_segmented(bound),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Shared Helpers ==
/// Exact `floor(sqrt(n))`.
pub(crate) fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    // The float estimate can be off by one in either direction near 2^53 and above.
    while root > 0 && root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// Allocates `len` flags set to `value`, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_flag_buffer(len: usize, value: bool) -> Result<Vec<bool>> {
    let mut flags = Vec::new();
    flags.try_reserve_exact(len).map_err(|e| {
        PrimeError::ResourceExhausted(format!("cannot allocate {} sieve flags: {}", len, e))
    })?;
    flags.resize(len, value);
    Ok(flags)
}

/// Converts a bound into the length of a flag buffer indexed `0..=bound`.
pub(crate) fn buffer_len(bound: u64) -> Result<usize> {
    usize::try_from(bound)
        .ok()
        .and_then(|b| b.checked_add(1))
        .ok_or_else(|| {
            PrimeError::ResourceExhausted(format!("bound {} exceeds addressable memory", bound))
        })
}

/// Output vector sized from the prime counting estimate `n / (ln n - 1.1)`.
pub(crate) fn try_prime_vec(bound: u64) -> Result<Vec<u64>> {
    let estimate = if bound < 16 {
        6
    } else {
        let n = bound as f64;
        (n / (n.ln() - 1.1)) as usize
    };
    let mut primes = Vec::new();
    primes.try_reserve(estimate).map_err(|e| {
        PrimeError::ResourceExhausted(format!("cannot allocate prime list for {}: {}", bound, e))
    })?;
    Ok(primes)
}
