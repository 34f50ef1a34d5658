//! Detail resources: location areas and creatures
//!
//! Only the fields the explorer reads are modelled; serde ignores the rest.

use serde::Deserialize;

use super::NamedResource;

/// A location area and the creatures that can be met there.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    pub pokemon_encounters: Vec<Encounter>,
}

impl LocationArea {
    /// Names of the encountered creatures, in source order with duplicates.
    pub fn encounter_names(self) -> Vec<String> {
        self.pokemon_encounters
            .into_iter()
            .map(|encounter| encounter.pokemon.name)
            .collect()
    }
}

/// One entry of a location's encounter table.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

/// A creature; `base_experience` doubles as its catch difficulty.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    #[serde(default)]
    pub name: String,
    pub base_experience: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encounter_names_keep_order_and_duplicates() {
        let json = r#"{
            "name": "pastoria-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": ""}, "version_details": []},
                {"pokemon": {"name": "magikarp", "url": ""}},
                {"pokemon": {"name": "tentacool", "url": ""}}
            ]
        }"#;
        let area: LocationArea = serde_json::from_str(json).unwrap();

        assert_eq!(
            area.encounter_names(),
            vec!["tentacool", "magikarp", "tentacool"]
        );
    }

    #[test]
    fn test_pokemon_difficulty() {
        let json = r#"{"id": 25, "name": "pikachu", "base_experience": 112, "height": 4}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, 112);
    }

    #[test]
    fn test_pokemon_null_experience_fails() {
        let json = r#"{"name": "missingno", "base_experience": null}"#;
        assert!(serde_json::from_str::<Pokemon>(json).is_err());
    }
}
