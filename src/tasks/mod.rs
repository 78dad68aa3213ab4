//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Sweep: removes expired cache entries at a fixed cadence

mod sweep;

pub use sweep::spawn_sweep_task;
