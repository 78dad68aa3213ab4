//! Pokedex - a command-line PokeAPI client
//!
//! Repeated lookups are served from an in-memory response cache with
//! TTL-based background expiration instead of refetching.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::ApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
