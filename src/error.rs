//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.
//!
//! Cache lookups are deliberately absent here: a missing key is a normal
//! outcome (`None`), not an error. The variants below cover cache
//! construction and the network/decoding layer around it.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero TTL or sweep interval
    #[error("cache interval must be greater than zero")]
    ZeroInterval,

    /// HTTP request failed or returned an error status
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Console I/O failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
