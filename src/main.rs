//! Pokedex - a command-line PokeAPI client
//!
//! Repeated lookups are served from an in-memory response cache with
//! TTL-based background expiration instead of refetching.

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{ApiClient, Cache, Config, Repl};

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache, starting its background sweep task
/// 4. Wrap the cache in an API client and start the prompt loop
/// 5. On exit or Ctrl+C, close the cache so the sweep task stops
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "warn" so logs stay out of the prompt; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "configuration loaded: ttl={}s, sweep_interval={}s, api_url={}",
        config.cache_ttl_secs, config.sweep_interval_secs, config.api_url
    );

    let cache = Cache::with_sweep_interval(config.cache_ttl(), config.sweep_interval())?;
    let client = ApiClient::new(cache, &config.api_url);
    let mut repl = Repl::new(client);

    tokio::select! {
        result = repl.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            println!();
            info!("received Ctrl+C, shutting down");
        }
    }

    repl.shutdown().await;
    info!("shutdown complete");
    Ok(())
}
