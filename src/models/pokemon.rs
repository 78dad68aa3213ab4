//! Pokemon response model
//!
//! Shape for a single pokemon (GET /pokemon/{name}), trimmed to the fields
//! the catch and inspect commands display.

use serde::Deserialize;

use crate::models::NamedResource;

/// A single pokemon
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Drives the catch difficulty; null for a few alternate forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<StatSlot>,
    pub types: Vec<TypeSlot>,
}

/// One base-stat value (hp, attack, ...)
#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of the pokemon's types
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
