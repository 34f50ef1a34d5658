//! Pokedex CLI - An interactive explorer for the PokeAPI catalog
//!
//! Responses are memoized in an in-memory cache whose entries are reaped by
//! a background task once they outlive the configured interval.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod repository;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repository::PokeApi;
pub use tasks::spawn_reaper_task;
