// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use crate::fl;

/// Failures talking to PokéAPI
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid PokéAPI url {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} answered with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl ApiError {
    /// PokéAPI answered, but the body didn't match the expected shape
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Request(err) if err.is_decode())
    }
}

/// Why a fetcher operation ended without results
#[derive(Clone, Debug, thiserror::Error)]
pub enum FetchError {
    #[error("could not load random Pokémon: {0}")]
    RandomSample(#[source] Arc<ApiError>),
    #[error("Pokémon {name:?} not found")]
    NotFound { name: String },
    #[error("{name} is not of type {wanted}")]
    WrongType { name: String, wanted: &'static str },
    #[error("type search failed: {0}")]
    TypeListing(#[source] Arc<ApiError>),
    #[error("name lookup failed: {0}")]
    Lookup(#[source] Arc<ApiError>),
}

impl FetchError {
    /// Localized text shown to the user
    pub fn message(&self) -> String {
        match self {
            FetchError::RandomSample(_) => fl!("error-random-sample"),
            FetchError::NotFound { .. } => fl!("error-not-found"),
            FetchError::WrongType { .. } => fl!("error-wrong-type"),
            FetchError::TypeListing(_) => fl!("error-type-search"),
            FetchError::Lookup(err) if err.is_decode() => fl!("error-unreadable"),
            FetchError::Lookup(_) => fl!("error-lookup"),
        }
    }
}
