//! Sieve of Atkin
//!
//! Marks candidates by counting representations in three binary quadratic
//! forms, then strikes out multiples of prime squares.

use tracing::trace;

use super::{buffer_len, integer_sqrt, try_flag_buffer, try_prime_vec};
use crate::error::Result;
use crate::models::PrimeResult;

/// Lists every prime `p <= bound` using the quadratic-form sieve.
///
/// The working buffer holds `bound + 1` flags and is dropped before
/// returning. Bounds below 2 yield an empty list.
pub fn sieve_atkin(bound: u64) -> Result<PrimeResult> {
    let len = buffer_len(bound)?;
    let mut candidate = try_flag_buffer(len, false)?;
    let root = integer_sqrt(bound);

    for x in 1..=root {
        let xx = x * x;
        for y in 1..=root {
            let yy = y * y;

            let n = 4 * xx + yy;
            if n <= bound && (n % 12 == 1 || n % 12 == 5) {
                candidate[n as usize] ^= true;
            }

            let n = 3 * xx + yy;
            if n <= bound && n % 12 == 7 {
                candidate[n as usize] ^= true;
            }

            if x > y {
                let n = 3 * xx - yy;
                if n <= bound && n % 12 == 11 {
                    candidate[n as usize] ^= true;
                }
            }
        }
    }

    // Odd representation counts also flag squareful numbers; clear them.
    for n in 5..=root {
        if candidate[n as usize] {
            let square = n * n;
            let mut k = square;
            while k <= bound {
                candidate[k as usize] = false;
                k += square;
            }
        }
    }

    // Neither form ever reaches 2 or 3.
    if bound >= 2 {
        candidate[2] = true;
    }
    if bound >= 3 {
        candidate[3] = true;
    }

    let mut primes = try_prime_vec(bound)?;
    primes.extend(
        candidate
            .iter()
            .enumerate()
            .filter(|(_, is_prime)| **is_prime)
            .map(|(n, _)| n as u64),
    );

    trace!(bound, count = primes.len(), "atkin sieve finished");
    Ok(PrimeResult::new(bound, primes))
}
