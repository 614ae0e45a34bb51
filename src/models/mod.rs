//! Request and Response models for the prime server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! extracting request paths and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::PrimePath;
pub use responses::{ErrorResponse, HealthResponse, PrimeResult, StatsResponse};
