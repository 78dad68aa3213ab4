//! Cache Module
//!
//! Provides a thread-safe in-memory response cache with a single fixed TTL
//! and automatic background expiration.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
