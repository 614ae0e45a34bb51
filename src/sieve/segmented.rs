//! Segmented Sieve of Eratosthenes
//!
//! Sieves `[2, bound]` one window at a time using the primes up to
//! `sqrt(bound)`, so the flag buffer never grows with the bound.

use tracing::trace;

use super::{buffer_len, integer_sqrt, try_flag_buffer, try_prime_vec};
use crate::error::Result;
use crate::models::PrimeResult;

/// Number of flags in one sieving window.
pub const SEGMENT_SIZE: usize = 32 * 1024;

/// Lists every prime `p <= bound` window by window.
///
/// Output is identical to [`super::sieve_atkin`] for every bound.
pub fn sieve_segmented(bound: u64) -> Result<PrimeResult> {
    if bound < 2 {
        return Ok(PrimeResult::new(bound, Vec::new()));
    }

    let base = base_primes(integer_sqrt(bound))?;
    // Next multiple of each base prime still to be struck out.
    let mut next: Vec<u64> = base.iter().map(|&p| p * p).collect();
    let mut segment = try_flag_buffer(SEGMENT_SIZE, true)?;
    let mut primes = try_prime_vec(bound)?;

    let mut low = 2u64;
    loop {
        let high = bound.min(low.saturating_add(SEGMENT_SIZE as u64 - 1));
        let window = (high - low + 1) as usize;
        let flags = &mut segment[..window];
        flags.fill(true);

        for (p, multiple) in base.iter().zip(next.iter_mut()) {
            while *multiple <= high {
                flags[(*multiple - low) as usize] = false;
                *multiple += p;
            }
        }

        primes.extend(
            flags
                .iter()
                .enumerate()
                .filter(|(_, is_prime)| **is_prime)
                .map(|(offset, _)| low + offset as u64),
        );

        if high == bound {
            break;
        }
        low = high + 1;
    }

    trace!(bound, count = primes.len(), base = base.len(), "segmented sieve finished");
    Ok(PrimeResult::new(bound, primes))
}

/// Plain Eratosthenes for the sieving primes `p <= limit`.
fn base_primes(limit: u64) -> Result<Vec<u64>> {
    let mut is_prime = try_flag_buffer(buffer_len(limit)?, true)?;
    let mut primes = Vec::new();
    for n in 2..=limit {
        if is_prime[n as usize] {
            primes.push(n);
            let mut k = n * n;
            while k <= limit {
                is_prime[k as usize] = false;
                k += n;
            }
        }
    }
    Ok(primes)
}
