//! Error types for the Pokedex explorer
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; every variant here comes from the repository or the REPL.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for repository and command failures.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Bad pagination parameters or missing command arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request never produced a response (connection, DNS, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Remote error: {url} returned status {status}")]
    Remote { status: u16, url: String },

    /// The payload did not have the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for PokedexError {
    fn from(err: reqwest::Error) -> Self {
        PokedexError::Transport(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the explorer.
pub type Result<T> = std::result::Result<T, PokedexError>;
