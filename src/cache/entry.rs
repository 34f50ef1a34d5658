//! Cache Entry Module
//!
//! Defines a single cached response body stamped with its insertion time.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

// == Cache Entry ==
/// A raw response body together with the moment it was inserted.
///
/// Entries are never mutated in place; re-adding a key replaces the entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, exactly as received from the network
    pub value: Vec<u8>,
    /// Monotonic insertion time, used for reaping
    pub created_at: Instant,
    /// Wall-clock insertion time, used for display only
    pub inserted_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            inserted_at: Utc::now(),
        }
    }

    // == Age ==
    /// Returns how old the entry was at `now`.
    ///
    /// An entry created after `now` has an age of zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry should be reaped by a tick fired at `now`.
    ///
    /// Boundary condition: an entry whose age equals `interval` is expired.
    /// Anything younger survives until the next tick.
    pub fn is_expired_at(&self, now: Instant, interval: Duration) -> bool {
        self.age_at(now) >= interval
    }

    /// Size of the stored payload in bytes.
    pub fn size(&self) -> usize {
        self.value.len()
    }
}
