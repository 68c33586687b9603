// SPDX-License-Identifier: GPL-3.0-only

mod pokemon_summary;
mod pokemon_type;

pub use pokemon_summary::PokemonSummary;
pub use pokemon_type::PokemonType;
