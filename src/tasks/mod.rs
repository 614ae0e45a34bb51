//! Background Tasks Module
//!
//! Contains background tasks that run alongside request handling.
//!
//! # Tasks
//! - Cache Warmer: Precomputes prime lists for every bound up to the cache ceiling

mod warmer;

pub use warmer::{join_warm_task, spawn_warm_task, warm_range, PROGRESS_INTERVAL};
