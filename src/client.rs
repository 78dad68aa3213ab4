//! API Client Module
//!
//! HTTP client for the remote API with the response cache in front of it.
//! Every fetch goes through the same path: look the URL up in the cache,
//! and only on a miss issue the request and store the raw body back.

use reqwest::Client;
use tracing::debug;

use crate::cache::{Cache, CacheStats};
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

// == Api Client ==
/// PokeAPI client with response caching.
///
/// Request URLs are the cache keys; payloads are the raw response bodies.
/// Decoding happens after the cache, so cached and fresh responses take the
/// same code path.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    cache: Cache,
    base_url: String,
}

impl ApiClient {
    // == Constructor ==
    /// Creates a new client over the given cache and API base URL.
    ///
    /// A trailing slash on the base URL is accepted and stripped so that
    /// callers can pass either form.
    pub fn new(cache: Cache, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: Client::new(),
            cache,
            base_url,
        }
    }

    // == Fetch Bytes ==
    /// Returns the response body for a URL, from cache when possible.
    ///
    /// On a miss the body is fetched, stored unconditionally (overwriting
    /// any entry that appeared meanwhile), and returned. Non-2xx statuses
    /// are errors and never cached.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?.to_vec();

        self.cache.put(url, body.clone()).await;
        Ok(body)
    }

    // == Location Areas ==
    /// Fetches one page of the location-area listing.
    ///
    /// `page_url` is a full pagination URL from a previous page, or `None`
    /// for the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let first_page = format!("{}/location-area/", self.base_url);
        let url = page_url.unwrap_or(&first_page);

        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Area ==
    /// Fetches a single location area with its encounter roster.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);

        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Pokemon ==
    /// Fetches a single pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);

        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Cache Stats ==
    /// Returns a snapshot of the underlying cache statistics.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    // == Close ==
    /// Shuts down the underlying cache and its sweep task.
    pub async fn close(self) {
        self.cache.close().await;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_client(base_url: &str) -> ApiClient {
        let cache = Cache::new(Duration::from_secs(300)).unwrap();
        ApiClient::new(cache, base_url)
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_stripped() {
        let client = test_client("https://pokeapi.co/api/v2/");
        assert_eq!(client.base_url, "https://pokeapi.co/api/v2");
        client.close().await;
    }

    #[tokio::test]
    async fn test_cached_body_is_served_without_network() {
        // A base URL nothing can resolve: any network attempt would error,
        // so a successful decode proves the payload came from the cache.
        let client = test_client("http://invalid.invalid");

        let url = "http://invalid.invalid/pokemon/pikachu";
        let body = br#"{"id":25,"name":"pikachu","base_experience":112,"height":4,"weight":60,"stats":[],"types":[]}"#;
        client.cache.put(url, body.to_vec()).await;

        let pokemon = client.pokemon("pikachu").await.unwrap();
        assert_eq!(pokemon.name, "pikachu");

        let stats = client.cache_stats().await;
        assert_eq!(stats.hits, 1);

        client.close().await;
    }

    #[tokio::test]
    async fn test_fetch_failure_caches_nothing() {
        let client = test_client("http://invalid.invalid");

        assert!(client.pokemon("pikachu").await.is_err());
        assert!(client.cache.is_empty().await);

        client.close().await;
    }
}
