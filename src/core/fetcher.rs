// SPDX-License-Identifier: GPL-3.0-only

//! Fetching, searching and the state the fetcher page renders from.
//!
//! Every search captures a [`RequestId`] when it starts and is only allowed to
//! write its result back while that id is still the pending one. Starting a new
//! search, clearing the filters or searching with empty filters all move the
//! page on, so a slow response can never overwrite what the user asked for last.

use std::sync::Arc;

use futures_util::future::try_join_all;
use rand::Rng;

use crate::{
    core::{
        api::{NamedResource, PokeApi},
        error::{ApiError, FetchError},
        sampling::pick_distinct_indices,
    },
    entities::{PokemonSummary, PokemonType},
};

/// How much the fetcher asks PokéAPI for
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FetchLimits {
    /// Size of the listing the random sample is drawn from
    pub listing_limit: usize,
    /// Number of random Pokémon loaded at startup
    pub sample_size: usize,
    /// Number of Pokémon shown when searching only by type
    pub type_result_limit: usize,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            listing_limit: 151,
            sample_size: 5,
            type_result_limit: 5,
        }
    }
}

/// Identifies one search, see the module docs
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RequestId(u64);

/// A search that needs the network
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchRequest {
    /// Exact name lookup, optionally checked against a type
    ByName {
        name: String,
        pokemon_type: Option<PokemonType>,
    },
    /// First few members of a type
    ByType(PokemonType),
}

impl SearchRequest {
    /// Builds the request for the current inputs, `None` when both are empty
    pub fn from_inputs(name_query: &str, type_filter: Option<PokemonType>) -> Option<Self> {
        // A whitespace-only name counts as no name at all
        let name = name_query.trim().to_lowercase();

        match (name.is_empty(), type_filter) {
            (false, pokemon_type) => Some(SearchRequest::ByName { name, pokemon_type }),
            (true, Some(pokemon_type)) => Some(SearchRequest::ByType(pokemon_type)),
            (true, None) => None,
        }
    }
}

/// Loads the baseline: `sample_size` distinct random Pokémon out of the first `listing_limit`
pub async fn load_random_sample<R: Rng + Send>(
    api: PokeApi,
    limits: FetchLimits,
    mut rng: R,
) -> Result<Vec<PokemonSummary>, FetchError> {
    let sample = async {
        let entries = api.list_pokemon(limits.listing_limit).await?;
        let selection: Vec<&NamedResource> =
            pick_distinct_indices(&mut rng, entries.len(), limits.sample_size)
                .into_iter()
                .map(|index| &entries[index])
                .collect();

        fetch_summaries(&api, selection).await
    };

    sample
        .await
        .map_err(|err| FetchError::RandomSample(Arc::new(err)))
}

/// Runs a search against PokéAPI
pub async fn search(
    api: PokeApi,
    request: SearchRequest,
    limits: FetchLimits,
) -> Result<Vec<PokemonSummary>, FetchError> {
    match request {
        SearchRequest::ByName { name, pokemon_type } => {
            search_by_name(&api, name, pokemon_type).await
        }
        SearchRequest::ByType(pokemon_type) => {
            search_by_type(&api, pokemon_type, limits.type_result_limit).await
        }
    }
}

async fn search_by_name(
    api: &PokeApi,
    name: String,
    pokemon_type: Option<PokemonType>,
) -> Result<Vec<PokemonSummary>, FetchError> {
    let summary = match api.pokemon(&name).await {
        Ok(detail) => PokemonSummary::from(detail),
        Err(ApiError::Status { .. }) => return Err(FetchError::NotFound { name }),
        Err(err) => return Err(FetchError::Lookup(Arc::new(err))),
    };

    match pokemon_type {
        Some(wanted) if !summary.has_type(wanted) => Err(FetchError::WrongType {
            name,
            wanted: wanted.api_name(),
        }),
        _ => Ok(vec![summary]),
    }
}

async fn search_by_type(
    api: &PokeApi,
    pokemon_type: PokemonType,
    limit: usize,
) -> Result<Vec<PokemonSummary>, FetchError> {
    let by_type = async {
        let members = api.type_members(pokemon_type).await?;
        fetch_summaries(api, members.iter().take(limit)).await
    };

    by_type
        .await
        .map_err(|err| FetchError::TypeListing(Arc::new(err)))
}

/// Fetches every entry's detail concurrently, failing as soon as one fails.
/// Results keep the order of `entries`.
async fn fetch_summaries<'a>(
    api: &PokeApi,
    entries: impl IntoIterator<Item = &'a NamedResource>,
) -> Result<Vec<PokemonSummary>, ApiError> {
    let details = try_join_all(entries.into_iter().map(|entry| api.pokemon_at(&entry.url))).await?;

    Ok(details.into_iter().map(PokemonSummary::from).collect())
}

#[derive(Debug, Default)]
enum Displayed {
    #[default]
    Baseline,
    Results(Vec<PokemonSummary>),
}

/// What happened when the user pressed search
#[derive(Debug, Eq, PartialEq)]
pub enum SearchStart {
    /// Both inputs were empty, the baseline is shown again and nothing needs fetching
    Restored,
    /// The request has to be run and handed back to [`FetcherState::finish_search`]
    Started(RequestId, SearchRequest),
}

/// Everything the fetcher page shows
#[derive(Debug, Default)]
pub struct FetcherState {
    baseline: Vec<PokemonSummary>,
    displayed: Displayed,
    /// Contents of the name input
    pub name_query: String,
    /// Selected type, `None` for all types
    pub type_filter: Option<PokemonType>,
    error: Option<FetchError>,
    loading_baseline: bool,
    pending_search: Option<RequestId>,
    generation: u64,
}

impl FetcherState {
    pub fn displayed(&self) -> &[PokemonSummary] {
        match &self.displayed {
            Displayed::Baseline => &self.baseline,
            Displayed::Results(results) => results,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading_baseline || self.pending_search.is_some()
    }

    pub fn begin_initial_load(&mut self) {
        self.loading_baseline = true;
        self.error = None;
    }

    /// Stores the random sample as the baseline.
    ///
    /// Returns `true` when the baseline is what's on screen, i.e. the displayed list changed.
    pub fn finish_initial_load(&mut self, result: Result<Vec<PokemonSummary>, FetchError>) -> bool {
        self.loading_baseline = false;
        let showing_baseline = matches!(self.displayed, Displayed::Baseline);

        match result {
            Ok(sample) => {
                tracing::info!("loaded {} random Pokémon", sample.len());
                self.baseline = sample;
                showing_baseline
            }
            Err(err) => {
                tracing::warn!("{err}");
                if showing_baseline && self.pending_search.is_none() {
                    self.error = Some(err);
                }
                false
            }
        }
    }

    pub fn begin_search(&mut self) -> SearchStart {
        match SearchRequest::from_inputs(&self.name_query, self.type_filter) {
            None => {
                self.restore_baseline();
                SearchStart::Restored
            }
            Some(request) => {
                self.generation += 1;
                let id = RequestId(self.generation);
                tracing::info!("starting search {id:?}: {request:?}");

                self.pending_search = Some(id);
                self.error = None;
                SearchStart::Started(id, request)
            }
        }
    }

    /// Commits a search result if `id` is still the pending search.
    ///
    /// Returns `false` when the result was stale and dropped.
    pub fn finish_search(
        &mut self,
        id: RequestId,
        result: Result<Vec<PokemonSummary>, FetchError>,
    ) -> bool {
        if self.pending_search != Some(id) {
            tracing::debug!("dropping stale search result {id:?}");
            return false;
        }
        self.pending_search = None;

        match result {
            Ok(found) => {
                tracing::info!("search {id:?} found {} Pokémon", found.len());
                self.displayed = Displayed::Results(found);
            }
            Err(err) => {
                tracing::warn!("search {id:?} failed: {err}");
                self.displayed = Displayed::Results(Vec::new());
                self.error = Some(err);
            }
        }

        true
    }

    /// Clears both inputs and the error and shows the baseline again
    pub fn reset(&mut self) {
        self.name_query.clear();
        self.type_filter = None;
        self.restore_baseline();
    }

    fn restore_baseline(&mut self) {
        if let Some(id) = self.pending_search.take() {
            tracing::debug!("abandoning search {id:?}");
        }
        self.error = None;
        self.displayed = Displayed::Baseline;
    }
}
