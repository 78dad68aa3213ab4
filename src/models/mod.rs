//! API response models
//!
//! Defines the subset of PokeAPI response bodies the commands decode.
//! Fields the client does not use are left out; serde ignores the rest.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, StatSlot, TypeSlot};
