//! Cache Entry Module
//!
//! Defines the structure for individual cached response payloads.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload together with its creation time.
///
/// The payload is opaque to the cache: it is stored and returned as raw bytes
/// and never inspected or mutated. Overwriting a key replaces the whole entry,
/// which resets its age to zero.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// When the entry was created
    pub created_at: Instant,
    /// The raw bytes being cached (typically a response body)
    pub payload: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            payload,
        }
    }

    // == Age ==
    /// Returns how long ago the entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired once its age is greater than
    /// or equal to the TTL, so an entry is never reported fresh after the
    /// full TTL has elapsed.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}
