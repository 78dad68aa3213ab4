//! Location area response models
//!
//! Shapes for the paginated location-area listing and a single area's
//! encounter roster.

use serde::Deserialize;

/// A name plus the URL of the full resource, PokeAPI's universal reference
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing (GET /location-area)
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area with its encounter roster (GET /location-area/{name})
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One pokemon that can be encountered in an area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_page() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_deserialize_area_encounters() {
        let json = r#"{
            "name": "canalave-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "staryu", "url": "https://pokeapi.co/api/v2/pokemon/120/"}}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.name, "canalave-city-area");
        assert_eq!(area.pokemon_encounters.len(), 2);
        assert_eq!(area.pokemon_encounters[1].pokemon.name, "staryu");
    }
}
