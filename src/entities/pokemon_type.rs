// SPDX-License-Identifier: GPL-3.0-only

use crate::fl;

/// Elemental types offered by the type filter
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PokemonType {
    Grass,
    Fire,
    Water,
    Electric,
    Normal,
    Bug,
    Flying,
    Poison,
    Ground,
    Rock,
    Psychic,
    Ghost,
    Dragon,
    Dark,
    Fairy,
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            PokemonType::Grass => write!(f, "{}", fl!("type-grass")),
            PokemonType::Fire => write!(f, "{}", fl!("type-fire")),
            PokemonType::Water => write!(f, "{}", fl!("type-water")),
            PokemonType::Electric => write!(f, "{}", fl!("type-electric")),
            PokemonType::Normal => write!(f, "{}", fl!("type-normal")),
            PokemonType::Bug => write!(f, "{}", fl!("type-bug")),
            PokemonType::Flying => write!(f, "{}", fl!("type-flying")),
            PokemonType::Poison => write!(f, "{}", fl!("type-poison")),
            PokemonType::Ground => write!(f, "{}", fl!("type-ground")),
            PokemonType::Rock => write!(f, "{}", fl!("type-rock")),
            PokemonType::Psychic => write!(f, "{}", fl!("type-psychic")),
            PokemonType::Ghost => write!(f, "{}", fl!("type-ghost")),
            PokemonType::Dragon => write!(f, "{}", fl!("type-dragon")),
            PokemonType::Dark => write!(f, "{}", fl!("type-dark")),
            PokemonType::Fairy => write!(f, "{}", fl!("type-fairy")),
        }
    }
}

impl PokemonType {
    /// Every type the filter dropdown offers, in display order
    pub const ALL: &'static [Self] = &[
        Self::Grass,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Normal,
        Self::Bug,
        Self::Flying,
        Self::Poison,
        Self::Ground,
        Self::Rock,
        Self::Psychic,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Fairy,
    ];

    /// Name of the type as PokéAPI spells it (also the `/type/{name}` path segment)
    pub fn api_name(&self) -> &'static str {
        match &self {
            PokemonType::Grass => "grass",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Normal => "normal",
            PokemonType::Bug => "bug",
            PokemonType::Flying => "flying",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Rock => "rock",
            PokemonType::Psychic => "psychic",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Fairy => "fairy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offers_fifteen_distinct_types() {
        let names: std::collections::HashSet<_> =
            PokemonType::ALL.iter().map(|t| t.api_name()).collect();

        assert_eq!(PokemonType::ALL.len(), 15);
        assert_eq!(names.len(), 15);
        assert!(!names.contains("steel"));
        assert!(!names.contains("ice"));
    }

    #[test]
    fn labels_come_from_the_fallback_language() {
        assert_eq!(PokemonType::Fire.to_string(), "Fire");
        assert_eq!(PokemonType::Psychic.to_string(), "Psychic");
    }
}
