//! Cache Store Module
//!
//! The locked-side cache engine: a HashMap of response payloads with a single
//! fixed TTL. All methods here run under the exclusive lock held by [`Cache`]
//! (see `handle.rs`), so they take `&mut self` and never await.
//!
//! [`Cache`]: crate::cache::Cache

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory payload storage with TTL-based expiration.
///
/// Lookups do not check entry age: an entry that has outlived the TTL but has
/// not yet been removed by the background sweep is still returned. Callers
/// must not read a hit as a staleness guarantee tighter than roughly
/// TTL + sweep interval.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-payload storage
    entries: HashMap<String, CacheEntry>,
    /// Fixed time-to-live applied to every entry
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new empty CacheStore with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Stores a payload under a key.
    ///
    /// If the key already exists, the entry is replaced wholesale and its age
    /// resets to zero. Any key is accepted, including the empty string, and
    /// any payload length, including empty.
    pub fn put(&mut self, key: String, payload: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(payload));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the payload stored under a key.
    ///
    /// Returns `None` only when no entry exists (never inserted, or already
    /// swept). An expired entry the sweep has not reached yet is still a hit.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes every entry whose age has reached the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl));

        let removed = before - self.entries.len();
        self.stats.record_swept(removed as u64);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == TTL ==
    /// Returns the TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const TEST_TTL: Duration = Duration::from_secs(300);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TEST_TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TEST_TTL);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(TEST_TTL);

        store.put("key1".to_string(), b"value1".to_vec());
        let payload = store.get("key1");

        assert_eq!(payload, Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new(TEST_TTL);

        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_empty_key_and_payload() {
        let mut store = CacheStore::new(TEST_TTL);

        store.put(String::new(), Vec::new());

        assert_eq!(store.get(""), Some(Vec::new()));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(TEST_TTL);

        store.put("key1".to_string(), b"value1".to_vec());
        store.put("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_key_isolation() {
        let mut store = CacheStore::new(TEST_TTL);

        store.put("key1".to_string(), b"value1".to_vec());
        store.put("key2".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.get("key2"), Some(b"value2".to_vec()));
    }

    #[test]
    fn test_store_get_does_not_check_age() {
        let mut store = CacheStore::new(Duration::from_millis(10));

        store.put("key1".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(30));

        // Entry is past its TTL but no sweep has run, so it is still a hit.
        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
    }

    #[test]
    fn test_store_sweep_removes_expired() {
        let mut store = CacheStore::new(Duration::from_millis(20));

        store.put("old".to_string(), b"a".to_vec());
        sleep(Duration::from_millis(40));
        store.put("new".to_string(), b"b".to_vec());

        let removed = store.sweep_expired();

        assert_eq!(removed, 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("new"), Some(b"b".to_vec()));
    }

    #[test]
    fn test_store_sweep_preserves_fresh() {
        let mut store = CacheStore::new(TEST_TTL);

        store.put("key1".to_string(), b"value1".to_vec());

        assert_eq!(store.sweep_expired(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new(Duration::from_millis(50));

        store.put("key1".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(30));

        // Rewrite just before expiration, entry should survive the sweep
        // another 30ms later.
        store.put("key1".to_string(), b"value2".to_vec());
        sleep(Duration::from_millis(30));

        store.sweep_expired();
        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(TEST_TTL);

        store.put("key1".to_string(), b"value1".to_vec());
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_stats_counts_swept() {
        let mut store = CacheStore::new(Duration::from_millis(10));

        store.put("key1".to_string(), b"a".to_vec());
        store.put("key2".to_string(), b"b".to_vec());
        sleep(Duration::from_millis(30));

        store.sweep_expired();

        let stats = store.stats();
        assert_eq!(stats.swept, 2);
        assert_eq!(stats.total_entries, 0);
    }
}
