//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint
const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time-to-live for cached responses, in seconds
    pub cache_ttl_secs: u64,
    /// Background sweep cadence in seconds; equals the TTL unless overridden
    pub sweep_interval_secs: u64,
    /// Base URL of the remote API
    pub api_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Response TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL_SECS` - Sweep cadence in seconds (default: the TTL)
    /// - `POKEAPI_URL` - Base API URL (default: the public PokeAPI)
    pub fn from_env() -> Self {
        let cache_ttl_secs = env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Self {
            cache_ttl_secs,
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(cache_ttl_secs),
            api_url: env::var("POKEAPI_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }

    /// Returns the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Returns the sweep cadence as a Duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            sweep_interval_secs: 300,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.sweep_interval_secs, 300);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("SWEEP_INTERVAL_SECS");
        env::remove_var("POKEAPI_URL");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.sweep_interval_secs, 300);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_durations() {
        let config = Config::default();
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.sweep_interval(), Duration::from_secs(300));
    }
}
