//! Response DTOs for the prime server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;

/// XML prolog written ahead of every XML document.
const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// All primes up to a bound, as returned by `GET /primes/:algorithm/:bound`.
///
/// `initial` holds the bound in canonical decimal form and `primes` is
/// strictly ascending with every value at most the bound. The field names
/// are the wire contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeResult {
    /// The requested bound
    pub initial: String,
    /// Every prime less than or equal to the bound
    pub primes: Vec<u64>,
}

impl PrimeResult {
    /// Creates a new PrimeResult for the given bound
    pub fn new(bound: u64, primes: Vec<u64>) -> Self {
        Self {
            initial: bound.to_string(),
            primes,
        }
    }

    /// Renders the `primeNumbers` XML document.
    ///
    /// `initial` is written as given so the caller can echo the literal
    /// request text; each prime becomes its own `<primes>` element.
    pub fn to_xml(&self, initial: &str) -> String {
        let mut out = String::with_capacity(XML_HEADER.len() + 64 + self.primes.len() * 20);
        out.push_str(XML_HEADER);
        out.push_str("<primeNumbers><initial>");
        out.push_str(&escape_xml(initial));
        out.push_str("</initial>");
        for prime in &self.primes {
            out.push_str("<primes>");
            out.push_str(&prime.to_string());
            out.push_str("</primes>");
        }
        out.push_str("</primeNumbers>");
        out
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Largest bound the cache may hold
    pub ceiling: u64,
    /// Whether the warmer has finished its pass
    pub warm_complete: bool,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Fraction of bounds `1..=ceiling` cached so far
    pub fill_ratio: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            fill_ratio: stats.fill_ratio(),
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            ceiling: stats.ceiling,
            warm_complete: stats.warm_complete,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
