// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{core::error::ApiError, entities::PokemonType};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `{name, url}` pair PokéAPI uses to point at another resource
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Response of `GET /pokemon?limit=N`
#[derive(Debug, Deserialize)]
pub struct PokemonListing {
    pub results: Vec<NamedResource>,
}

/// The subset of `GET /pokemon/{nameOrId}` we care about
#[derive(Debug, Deserialize)]
pub struct PokemonDetail {
    pub id: i64,
    pub name: String,
    pub sprites: PokemonSprites,
    pub types: Vec<PokemonTypeSlot>,
}

#[derive(Debug, Deserialize)]
pub struct PokemonSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// Response of `GET /type/{typeName}`
#[derive(Debug, Deserialize)]
pub struct TypeListing {
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedResource,
}

/// Thin PokéAPI client, cheap to clone (the connection pool is shared)
#[derive(Clone, Debug)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: Url,
}

impl PokeApi {
    pub fn new(base_url: &str) -> Result<PokeApi, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(PokeApi { client, base_url })
    }

    /// The underlying HTTP client, also used for sprite downloads
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Lists the first `limit` species as `{name, url}` pairs
    pub async fn list_pokemon(&self, limit: usize) -> Result<Vec<NamedResource>, ApiError> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let listing: PokemonListing = self.get_json(url).await?;
        Ok(listing.results)
    }

    /// Fetches a Pokémon by its exact (lowercase) name or numeric id
    pub async fn pokemon(&self, name_or_id: &str) -> Result<PokemonDetail, ApiError> {
        let url = self.endpoint(&["pokemon", name_or_id])?;
        self.get_json(url).await
    }

    /// Fetches a Pokémon through the url a listing pointed at
    pub async fn pokemon_at(&self, url: &str) -> Result<PokemonDetail, ApiError> {
        let url = Url::parse(url)
            .or_else(|_| self.base_url.join(url))
            .map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;
        self.get_json(url).await
    }

    /// Lists every Pokémon that has the given type, in PokéAPI order
    pub async fn type_members(
        &self,
        pokemon_type: PokemonType,
    ) -> Result<Vec<NamedResource>, ApiError> {
        let url = self.endpoint(&["type", pokemon_type.api_name()])?;
        let listing: TypeListing = self.get_json(url).await?;

        Ok(listing
            .pokemon
            .into_iter()
            .map(|member| member.pokemon)
            .collect())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!("GET {url}");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn lists_pokemon_with_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .and(query_param("limit", "151"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1302,
                "next": null,
                "previous": null,
                "results": [
                    {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                    {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = PokeApi::new(&server.uri()).unwrap();
        let entries = api.list_pokemon(151).await.unwrap();

        assert_eq!(
            entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["bulbasaur", "ivysaur"]
        );
    }

    #[tokio::test]
    async fn keeps_the_base_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/type/fire"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 10,
                "name": "fire",
                "pokemon": [
                    {"slot": 1, "pokemon": {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = PokeApi::new(&format!("{}/api/v2/", server.uri())).unwrap();
        let members = api.type_members(PokemonType::Fire).await.unwrap();

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "charmander");
    }

    #[tokio::test]
    async fn decodes_detail_ignoring_unknown_fields() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon/pikachu"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 25,
                "name": "pikachu",
                "height": 4,
                "weight": 60,
                "sprites": {"front_default": "https://img.example/25.png", "back_default": null},
                "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}]
            })))
            .mount(&server)
            .await;

        let api = PokeApi::new(&server.uri()).unwrap();
        let detail = api.pokemon("pikachu").await.unwrap();

        assert_eq!(detail.id, 25);
        assert_eq!(
            detail.sprites.front_default.as_deref(),
            Some("https://img.example/25.png")
        );
        assert_eq!(detail.types[0].type_.name, "electric");
    }

    #[tokio::test]
    async fn missing_sprite_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 10,
                "name": "caterpie",
                "sprites": {"front_default": null},
                "types": [{"slot": 1, "type": {"name": "bug", "url": ""}}]
            })))
            .mount(&server)
            .await;

        let api = PokeApi::new(&server.uri()).unwrap();
        let detail = api
            .pokemon_at(&format!("{}/pokemon/10", server.uri()))
            .await
            .unwrap();

        assert_eq!(detail.name, "caterpie");
        assert!(detail.sprites.front_default.is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon/notapokemon"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let api = PokeApi::new(&server.uri()).unwrap();
        let result = api.pokemon("notapokemon").await;

        match result {
            Err(ApiError::Status { status, .. }) => assert_eq!(status.as_u16(), 404),
            other => panic!("Expected a 404 status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_request_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let api = PokeApi::new(&server.uri()).unwrap();
        let result = api.list_pokemon(151).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
        assert!(err.is_decode());
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            PokeApi::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
