//! Cache Handle Module
//!
//! The public face of the cache: wraps the locked [`CacheStore`] together
//! with the background sweep task and its shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_sweep_task;

// == Cache ==
/// A thread-safe in-memory byte cache with automatic background expiration.
///
/// Every entry shares one fixed TTL. A background task wakes at a fixed
/// cadence (the sweep interval, equal to the TTL unless set separately) and
/// removes entries whose age has reached the TTL.
///
/// Because removal only happens on sweep ticks, a hit is not a strict
/// freshness guarantee: an entry can still be returned for up to one sweep
/// interval past its nominal expiration, so a payload may be as old as
/// TTL + sweep interval.
///
/// Dropping a `Cache` without calling [`close`](Cache::close) leaves the
/// sweep task running until the watch sender is dropped with it; call
/// `close` to shut the task down deterministically.
#[derive(Debug)]
pub struct Cache {
    /// Shared storage, also held by the sweep task
    store: Arc<RwLock<CacheStore>>,
    /// Shutdown signal for the sweep task
    shutdown: watch::Sender<bool>,
    /// Handle to the sweep task, awaited on close
    sweeper: JoinHandle<()>,
}

impl Cache {
    // == Constructors ==
    /// Creates a new empty cache and starts its sweep task.
    ///
    /// The sweep cadence defaults to the TTL itself. Returns
    /// [`PokedexError::ZeroInterval`] for a zero TTL, which would otherwise
    /// busy-loop the sweep and expire every entry instantly.
    pub fn new(ttl: Duration) -> Result<Self> {
        Self::with_sweep_interval(ttl, ttl)
    }

    /// Creates a new empty cache with a sweep cadence independent of the TTL.
    ///
    /// A short sweep interval tightens the staleness bound at the cost of
    /// more frequent lock acquisition. Returns
    /// [`PokedexError::ZeroInterval`] if either duration is zero.
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Result<Self> {
        if ttl.is_zero() || sweep_interval.is_zero() {
            return Err(PokedexError::ZeroInterval);
        }

        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let sweeper = spawn_sweep_task(store.clone(), sweep_interval, shutdown_rx);

        Ok(Self {
            store,
            shutdown,
            sweeper,
        })
    }

    // == Put ==
    /// Stores a payload under a key, replacing any previous entry.
    ///
    /// Replacement resets the entry's age to zero. Cannot fail.
    pub async fn put(&self, key: impl Into<String>, payload: Vec<u8>) {
        let mut store = self.store.write().await;
        store.put(key.into(), payload);
    }

    // == Get ==
    /// Retrieves the payload stored under a key.
    ///
    /// `None` means no entry exists. A `Some` payload may be up to
    /// TTL + sweep interval old (see the type-level docs on staleness).
    /// Never blocks on I/O; only the in-memory lock is taken.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        store.stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Close ==
    /// Shuts down the background sweep task.
    ///
    /// Signals the task and waits for it to exit, so the task is guaranteed
    /// gone by the time this returns. The stored entries are dropped with
    /// the cache.
    pub async fn close(self) {
        // Send fails only if the task already exited; either way awaiting
        // the handle below observes its completion.
        let _ = self.shutdown.send(true);
        if let Err(e) = self.sweeper.await {
            debug!("sweep task ended abnormally: {}", e);
        }
    }
}
