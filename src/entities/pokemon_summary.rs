// SPDX-License-Identifier: GPL-3.0-only

use crate::{
    core::api::PokemonDetail,
    entities::PokemonType,
    utils::{capitalize_string, join_type_names},
};

/// Minimal view of a Pokémon species, everything a card needs
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PokemonSummary {
    pub id: i64,
    /// Lowercase, as returned by PokéAPI
    pub name: String,
    pub image_url: Option<String>,
    pub types: Vec<String>,
}

impl From<PokemonDetail> for PokemonSummary {
    fn from(detail: PokemonDetail) -> Self {
        PokemonSummary {
            id: detail.id,
            name: detail.name,
            image_url: detail.sprites.front_default,
            types: detail
                .types
                .into_iter()
                .map(|slot| slot.type_.name)
                .collect(),
        }
    }
}

impl PokemonSummary {
    pub fn display_name(&self) -> String {
        capitalize_string(&self.name)
    }

    pub fn display_types(&self) -> String {
        join_type_names(&self.types)
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.iter().any(|t| t == pokemon_type.api_name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::api::{NamedResource, PokemonSprites, PokemonTypeSlot};

    fn bulbasaur_detail() -> PokemonDetail {
        PokemonDetail {
            id: 1,
            name: String::from("bulbasaur"),
            sprites: PokemonSprites {
                front_default: Some(String::from("https://img.example/1.png")),
            },
            types: vec![
                PokemonTypeSlot {
                    type_: NamedResource {
                        name: String::from("grass"),
                        url: String::from("https://pokeapi.co/api/v2/type/12/"),
                    },
                },
                PokemonTypeSlot {
                    type_: NamedResource {
                        name: String::from("poison"),
                        url: String::from("https://pokeapi.co/api/v2/type/4/"),
                    },
                },
            ],
        }
    }

    #[test]
    fn maps_detail_into_summary() {
        let summary = PokemonSummary::from(bulbasaur_detail());

        assert_eq!(
            summary,
            PokemonSummary {
                id: 1,
                name: String::from("bulbasaur"),
                image_url: Some(String::from("https://img.example/1.png")),
                types: vec![String::from("grass"), String::from("poison")],
            }
        );
    }

    #[test]
    fn card_text() {
        let summary = PokemonSummary::from(bulbasaur_detail());

        assert_eq!(summary.display_name(), "Bulbasaur");
        assert_eq!(summary.display_types(), "Grass, Poison");
        assert!(summary.has_type(PokemonType::Poison));
        assert!(!summary.has_type(PokemonType::Fire));
    }

    #[test]
    fn hyphenated_names_keep_their_hyphen() {
        let summary = PokemonSummary {
            id: 122,
            name: String::from("mr-mime"),
            image_url: None,
            types: vec![String::from("psychic"), String::from("fairy")],
        };

        assert_eq!(summary.display_name(), "Mr-mime");
        assert_eq!(summary.display_types(), "Psychic, Fairy");
    }
}
