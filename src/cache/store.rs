//! Cache Store Module
//!
//! The unsynchronized entry map. [`super::Cache`] wraps it in a lock and
//! shares it with the reaper task.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Entry Summary ==
/// A read-only view of one entry, used for listing the cache contents.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySummary {
    pub key: String,
    pub inserted_at: DateTime<Utc>,
    pub size: usize,
}

// == Cache Store ==
/// String-keyed map of raw payloads with lookup statistics.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Usage statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any existing entry and
    /// restarting its age.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Expiry is not checked here; an entry stays visible until the reaper
    /// removes it.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry that is at least `interval` old at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant, interval: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired_at(now, interval));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Summaries ==
    /// Lists the stored entries, oldest first.
    pub fn summaries(&self) -> Vec<EntrySummary> {
        let mut entries: Vec<(&String, &CacheEntry)> = self.entries.iter().collect();
        entries.sort_by_key(|(_, entry)| entry.created_at);

        entries
            .into_iter()
            .map(|(key, entry)| EntrySummary {
                key: key.clone(),
                inserted_at: entry.inserted_at,
                size: entry.size(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
