//! API Module
//!
//! HTTP handlers and routing for the prime server REST API.
//!
//! # Endpoints
//! - `GET /primes/:algorithm/:bound` - Primes up to bound as JSON
//! - `GET /primes/xml/:algorithm/:bound` - Primes up to bound as XML
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
