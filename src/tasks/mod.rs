//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the lifetime of the
//! cache.
//!
//! # Tasks
//! - Reaper: removes cache entries older than the reap interval

mod reaper;

pub use reaper::spawn_reaper_task;
