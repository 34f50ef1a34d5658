//! Cache-backed catalog repository
//!
//! Every accessor follows the same path: look the URL up in the cache,
//! fall back to the transport on a miss, store the raw body, then decode.

use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::transport::{ReqwestTransport, Transport};
use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, NamedResource, Page, Pokemon};

/// Typed, cached access to the catalog API.
#[derive(Clone)]
pub struct PokeApi {
    base_url: String,
    cache: Cache,
    transport: Arc<dyn Transport>,
}

impl PokeApi {
    // == Constructor ==
    /// Creates a repository over an existing cache and transport.
    pub fn new(base_url: impl Into<String>, cache: Cache, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            cache,
            transport,
        }
    }

    /// Creates a repository from configuration, with a fresh cache and a
    /// reqwest transport.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &Config) -> Self {
        let cache = Cache::new(config.cache_interval());
        Self::new(
            config.base_url.clone(),
            cache,
            Arc::new(ReqwestTransport::new()),
        )
    }

    /// The cache backing this repository.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == Location Listing ==
    /// Fetches one page of location areas.
    ///
    /// `offset` is a 1-based page token: page `n` starts at item
    /// `(n - 1) * limit`.
    pub async fn location_page(&self, limit: u32, offset: u32) -> Result<Page<NamedResource>> {
        if limit == 0 {
            return Err(PokedexError::InvalidArgument(
                "limit must be greater than 0".to_string(),
            ));
        }
        if offset == 0 {
            return Err(PokedexError::InvalidArgument(
                "offset must be greater than 0".to_string(),
            ));
        }

        let start = u64::from(offset - 1) * u64::from(limit);
        let url = format!(
            "{}/location-area?limit={}&offset={}",
            self.base_url, limit, start
        );
        self.fetch_json(&url).await
    }

    /// Names of the location areas on the given page.
    pub async fn list_locations(&self, limit: u32, offset: u32) -> Result<Vec<String>> {
        let page = self.location_page(limit, offset).await?;
        Ok(page.results.into_iter().map(|location| location.name).collect())
    }

    // == Encounters ==
    /// Names of every creature encountered in `area`, in source order.
    pub async fn list_encounters(&self, area: &str) -> Result<Vec<String>> {
        let area = non_empty(area, "area name")?;
        let url = self.resource_url("location-area", area)?;

        let location: LocationArea = self.fetch_json(&url).await?;
        Ok(location.encounter_names())
    }

    // == Difficulty ==
    /// The base experience of `name`, used as its catch difficulty.
    pub async fn entity_difficulty(&self, name: &str) -> Result<u32> {
        let name = non_empty(name, "pokemon name")?;
        let url = self.resource_url("pokemon", name)?;

        let pokemon: Pokemon = self.fetch_json(&url).await?;
        Ok(pokemon.base_experience)
    }

    /// Builds `{base}/{collection}/{name}` with `name` percent-encoded as a
    /// single path segment, so it can never address another resource.
    fn resource_url(&self, collection: &str, name: &str) -> Result<String> {
        let mut url = Url::parse(&self.base_url).map_err(|err| {
            PokedexError::InvalidArgument(format!("bad base url {}: {}", self.base_url, err))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                PokedexError::InvalidArgument(format!("bad base url {}", self.base_url))
            })?
            .pop_if_empty()
            .push(collection)
            .push(name);

        Ok(url.into())
    }

    // == Cache-first Fetch ==
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let raw = self.fetch_raw(url).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Returns the body for `url`, from the cache when possible.
    ///
    /// Only successful responses are cached.
    async fn fetch_raw(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(raw) = self.cache.get(url).await {
            debug!("Cache hit: {}", url);
            return Ok(raw);
        }

        debug!("Cache miss, fetching {}", url);
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            warn!("{} returned status {}", url, response.status);
            return Err(PokedexError::Remote {
                status: response.status,
                url: url.to_string(),
            });
        }

        self.cache.add(url, response.body.clone()).await;
        Ok(response.body)
    }
}

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PokedexError::InvalidArgument(format!("{} is required", what)));
    }
    Ok(value)
}
