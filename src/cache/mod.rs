//! Cache Module
//!
//! Provides an in-memory response cache with time-based eviction.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::{Cache, MIN_INTERVAL};
pub use stats::CacheStats;
pub use store::{CacheStore, EntrySummary};
