//! Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task sleeps for `interval` between passes. Each pass acquires the
/// write lock on the store, removes every entry whose age has reached the
/// TTL, and releases the lock before sleeping again. Nothing is awaited
/// while the lock is held.
///
/// The task exits when the `shutdown` channel changes value or its sender is
/// dropped; [`Cache::close`] uses this to guarantee the task is gone before
/// it returns. Without that signal the loop would run for the life of the
/// process even after the cache itself was discarded.
///
/// [`Cache::close`]: crate::cache::Cache::close
pub fn spawn_sweep_task(
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("starting cache sweep task, interval {:?}", interval);

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {
                    let removed = {
                        let mut store_guard = store.write().await;
                        store_guard.sweep_expired()
                    };

                    if removed > 0 {
                        info!("sweep removed {} expired entries", removed);
                    } else {
                        debug!("sweep found no expired entries");
                    }
                }
                _ = shutdown.changed() => {
                    debug!("sweep task received shutdown signal");
                    break;
                }
            }
        }

        info!("cache sweep task stopped");
    })
}
