//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that reaps the store every `interval`.
///
/// Each tick hands the actual cleanup to its own task so a slow pass never
/// delays the timer. Overlapping passes are serialized by the store lock.
/// An entry is removed by the first tick at which it is at least `interval`
/// old.
///
/// The task holds only a weak reference and exits on the first tick after
/// the store has been dropped. Nothing ever awaits the returned handle.
///
/// # Panics
/// Panics if `interval` is zero.
pub fn spawn_reaper_task(store: Weak<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    let mut ticker = interval_at(Instant::now() + interval, interval);

    tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        loop {
            let tick = ticker.tick().await;

            let Some(shared) = store.upgrade() else {
                debug!("Cache dropped, stopping reaper");
                break;
            };

            tokio::spawn(async move {
                let removed = {
                    let mut store_guard = shared.write().await;
                    store_guard.reap(tick, interval)
                };

                if removed > 0 {
                    info!("Cache reap: removed {} expired entries", removed);
                } else {
                    debug!("Cache reap: no expired entries found");
                }
            });
        }
    })
}
