// SPDX-License-Identifier: GPL-3.0-only

use std::collections::{HashMap, HashSet};

use anywho::{Error, anywho};
use cosmic::widget::image;

use crate::entities::PokemonSummary;

/// Sprites downloaded during this session, keyed by Pokémon id
#[derive(Debug, Default)]
pub struct SpriteCache {
    handles: HashMap<i64, image::Handle>,
    in_flight: HashSet<i64>,
}

impl SpriteCache {
    pub fn get(&self, id: i64) -> Option<&image::Handle> {
        self.handles.get(&id)
    }

    /// Returns the `(id, url)` of every sprite that still has to be downloaded
    /// and marks them as in flight, so asking twice won't download twice.
    pub fn claim_missing(&mut self, pokemon: &[PokemonSummary]) -> Vec<(i64, String)> {
        pokemon
            .iter()
            .filter_map(|p| p.image_url.as_ref().map(|url| (p.id, url)))
            .filter(|(id, _)| !self.handles.contains_key(id))
            .filter(|(id, _)| self.in_flight.insert(*id))
            .map(|(id, url)| (id, url.clone()))
            .collect()
    }

    pub fn insert(&mut self, id: i64, bytes: Vec<u8>) {
        self.in_flight.remove(&id);
        self.handles.insert(id, image::Handle::from_bytes(bytes));
    }

    /// Forgets a failed download so it can be retried the next time the Pokémon shows up
    pub fn release(&mut self, id: i64) {
        self.in_flight.remove(&id);
    }
}

/// Attempts to download a sprite
pub async fn download_sprite(client: reqwest::Client, image_url: String) -> Result<Vec<u8>, Error> {
    let response = client.get(&image_url).send().await?;
    if response.status().is_success() {
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    } else {
        Err(anywho!(
            "Failed to download image {image_url}. Status: {}",
            response.status()
        ))
    }
}
