//! Prime Cache Server - Lists primes up to a bound over HTTP
//!
//! Answers from a precomputed cache for small bounds and sieves live
//! (Atkin or segmented Eratosthenes) for everything else.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod sieve;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{PrimeError, Result};
pub use models::PrimeResult;
pub use policy::{parse_bound, PrimeService};
pub use sieve::Algorithm;
pub use tasks::{join_warm_task, spawn_warm_task};
