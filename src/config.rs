//! Configuration Module
//!
//! Handles loading explorer configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default catalog API root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the catalog API, without trailing slash
    pub base_url: String,
    /// Cache reap interval in seconds
    pub cache_interval: u64,
    /// Number of locations shown per `map` page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_BASE_URL` - Catalog API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_INTERVAL_SECS` - Reap interval in seconds (default: 5)
    /// - `POKEDEX_PAGE_SIZE` - Locations per page (default: 20)
    ///
    /// Zero or unparsable numbers fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cache_interval),
            page_size: env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.page_size),
        }
    }

    /// The cache reap interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_interval: 5,
            page_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.cache_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env so parallel tests don't race on it
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_CACHE_INTERVAL_SECS");
        env::remove_var("POKEDEX_PAGE_SIZE");

        let config = Config::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.page_size, 20);

        env::set_var("POKEDEX_API_BASE_URL", "http://localhost:8080/api/");
        env::set_var("POKEDEX_CACHE_INTERVAL_SECS", "0");
        env::set_var("POKEDEX_PAGE_SIZE", "7");

        let config = Config::from_env();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.page_size, 7);

        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_CACHE_INTERVAL_SECS");
        env::remove_var("POKEDEX_PAGE_SIZE");
    }
}
