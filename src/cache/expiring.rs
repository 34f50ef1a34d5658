//! Expiring Cache Module
//!
//! Shared handle over a [`CacheStore`] whose entries are reaped by a
//! background task once they are older than the configured interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::cache::{CacheStats, CacheStore, EntrySummary};
use crate::tasks::spawn_reaper_task;

/// Shortest reap interval a cache will run with
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

// == Cache ==
/// Thread-safe response cache with time-based eviction.
///
/// Cloning the handle shares the same underlying store. The reaper started
/// by [`Cache::new`] runs until the last handle is dropped.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    reaper: Arc<JoinHandle<()>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a tokio runtime. Intervals shorter than
    /// [`MIN_INTERVAL`] are raised to it.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            warn!("Cache interval {:?} too short, using {:?}", interval, MIN_INTERVAL);
            MIN_INTERVAL
        } else {
            interval
        };
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reaper_task(Arc::downgrade(&store), interval);

        Self {
            store,
            interval,
            reaper: Arc::new(reaper),
        }
    }

    // == Add ==
    /// Inserts or replaces the payload stored under `key`.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut store = self.store.write().await;
        store.add(key.into(), value);
    }

    // == Get ==
    /// Returns the payload stored under `key`, if it has not been reaped.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        // Write lock: lookups update the hit/miss counters
        let mut store = self.store.write().await;
        store.get(key)
    }

    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Lists the cached entries, oldest first.
    pub async fn entries(&self) -> Vec<EntrySummary> {
        self.store.read().await.summaries()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// The reap interval this cache was built with.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true while the background reaper is alive.
    pub fn reaper_running(&self) -> bool {
        !self.reaper.is_finished()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const INTERVAL: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_add_then_get() {
        let cache = Cache::new(INTERVAL);

        cache.add("https://example.com", b"testdata".to_vec()).await;

        assert_eq!(
            cache.get("https://example.com").await,
            Some(b"testdata".to_vec())
        );
        assert!(cache.reaper_running());
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let cache = Cache::new(INTERVAL);
        assert_eq!(cache.get("https://example.com/missing").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_is_clamped() {
        let cache = Cache::new(Duration::ZERO);
        assert_eq!(cache.interval(), MIN_INTERVAL);

        cache.add("key", b"value".to_vec()).await;
        assert_eq!(cache.get("key").await, Some(b"value".to_vec()));

        sleep(Duration::from_millis(5)).await;
        assert!(cache.reaper_running());
        assert_eq!(cache.get("key").await, None);
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = Cache::new(INTERVAL);
        let other = cache.clone();

        other.add("key", b"value".to_vec()).await;

        assert_eq!(cache.get("key").await, Some(b"value".to_vec()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_loop_evicts_after_interval() {
        let cache = Cache::new(INTERVAL);
        cache.add("https://example.com", b"testdata".to_vec()).await;

        // Still present just before the first tick
        sleep(INTERVAL - Duration::from_millis(10)).await;
        assert!(cache.get("https://example.com").await.is_some());

        sleep(Duration::from_millis(20)).await;

        assert_eq!(cache.get("https://example.com").await, None);
        assert!(cache.is_empty().await);
        assert_eq!(cache.stats().await.reaped, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_young_entry_survives_tick() {
        let cache = Cache::new(INTERVAL);

        sleep(INTERVAL / 2).await;
        cache.add("young", b"value".to_vec()).await;

        // First tick fires while the entry is only half an interval old
        sleep(INTERVAL / 2 + Duration::from_millis(100)).await;
        assert_eq!(cache.get("young").await, Some(b"value".to_vec()));

        // Second tick sees it one and a half intervals old
        sleep(INTERVAL).await;
        assert_eq!(cache.get("young").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_stops_when_cache_dropped() {
        let cache = Cache::new(INTERVAL);
        let reaper = Arc::clone(&cache.reaper);
        drop(cache);

        sleep(INTERVAL + Duration::from_millis(10)).await;

        assert!(reaper.is_finished());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_access_during_reaps() {
        let cache = Cache::new(Duration::from_millis(5));
        let mut handles = Vec::new();

        for worker in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..200 {
                    let key = format!("worker-{worker}-{i}");
                    cache.add(key.clone(), key.clone().into_bytes()).await;
                    if let Some(value) = cache.get(&key).await {
                        assert_eq!(value, key.into_bytes());
                    }
                    if i % 50 == 0 {
                        tokio::time::sleep(Duration::from_millis(3)).await;
                    }
                }
            }));
        }

        for handle in handles {
            handle.await.expect("worker should not panic");
        }

        let stats = cache.stats().await;
        assert!(stats.total_entries <= 8 * 200);
        assert_eq!(stats.hits + stats.misses, 8 * 200);
        assert_eq!(stats.total_entries as u64 + stats.reaped, 8 * 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_lose_no_updates() {
        let cache = Cache::new(Duration::from_secs(60));
        let mut handles = Vec::new();

        for worker in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..100 {
                    cache.add(format!("w{worker}-{i}"), vec![worker as u8]).await;
                }
            }));
        }

        for handle in handles {
            handle.await.expect("worker should not panic");
        }

        assert_eq!(cache.len().await, 800);
        for worker in 0..8u8 {
            assert_eq!(cache.get(&format!("w{worker}-99")).await, Some(vec![worker]));
        }
    }
}
