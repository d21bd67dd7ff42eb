//! Background expiry sweeper.
//!
//! A `get` already evicts the expired entry it finds, but keys that are
//! never read again would otherwise accumulate forever. The sweeper runs
//! [`CacheBackend::purge_expired`] on a fixed interval to bound that
//! growth.
//!
//! The sweeper's lifecycle is owned by whoever spawned it: hold the
//! [`SweeperHandle`] and call [`SweeperHandle::shutdown`] during teardown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::traits::CacheBackend;

/// Spawns the periodic sweep task for a cache backend.
pub struct Sweeper;

impl Sweeper {
    /// Start sweeping `cache` every `interval`.
    ///
    /// The first tick fires after one full interval, not immediately.
    pub fn spawn<C>(cache: Arc<C>, interval: Duration) -> SweeperHandle
    where
        C: CacheBackend + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // Consume the immediate first tick so sweeps start one
            // interval after spawn.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match cache.purge_expired().await {
                            Ok(0) => {}
                            Ok(evicted) => {
                                tracing::debug!(evicted, "cache sweep evicted expired entries");
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "cache sweep failed");
                            }
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
        });

        SweeperHandle { shutdown_tx, task }
    }
}

/// Handle to a running sweeper task.
pub struct SweeperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signal the sweeper to stop and wait for it to exit.
    pub async fn shutdown(self) {
        // Receiver dropping with the task also ends the loop, so a failed
        // send only means the task is already gone.
        let _ = self.shutdown_tx.send(true);
        let _ = self.task.await;
    }

    /// Abort the sweeper without waiting.
    pub fn abort(self) {
        self.task.abort();
    }
}
