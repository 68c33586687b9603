// SPDX-License-Identifier: GPL-3.0-only

use cosmic::iced::{Alignment, Color, Length, Task};
use cosmic::{Element, cosmic_theme, theme, widget};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    core::{
        api::PokeApi,
        error::FetchError,
        fetcher::{
            FetchLimits, FetcherState, RequestId, SearchStart, load_random_sample, search,
        },
        image_cache::{SpriteCache, download_sprite},
    },
    entities::{PokemonSummary, PokemonType},
    fl,
};

const SPRITE_SIZE: u16 = 96;
const CARD_WIDTH: f32 = 180.0;

#[derive(Debug, Clone)]
pub enum Message {
    RandomSampleLoaded(Result<Vec<PokemonSummary>, FetchError>),
    NameQueryChanged(String),
    /// Index into the type dropdown, 0 is "All types"
    TypeSelected(usize),
    Search,
    SearchFinished(RequestId, Result<Vec<PokemonSummary>, FetchError>),
    Clear,
    SpriteLoaded(i64, Option<Vec<u8>>),
}

/// The Pokémon page: random sample, name/type search and the card grid
pub struct Fetcher {
    api: PokeApi,
    limits: FetchLimits,
    state: FetcherState,
    sprites: SpriteCache,
    type_labels: Vec<String>,
}

impl Fetcher {
    /// Creates the page and starts loading the random sample
    pub fn new(api: PokeApi, limits: FetchLimits) -> (Self, Task<Message>) {
        let type_labels = std::iter::once(fl!("all-types"))
            .chain(PokemonType::ALL.iter().map(|t| t.to_string()))
            .collect();

        let mut fetcher = Fetcher {
            api,
            limits,
            state: FetcherState::default(),
            sprites: SpriteCache::default(),
            type_labels,
        };

        fetcher.state.begin_initial_load();
        let task = Task::perform(
            load_random_sample(fetcher.api.clone(), limits, StdRng::from_os_rng()),
            Message::RandomSampleLoaded,
        );

        (fetcher, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RandomSampleLoaded(result) => {
                if self.state.finish_initial_load(result) {
                    return self.load_sprites();
                }
            }
            Message::NameQueryChanged(value) => {
                self.state.name_query = value;
            }
            Message::TypeSelected(index) => {
                self.state.type_filter = index
                    .checked_sub(1)
                    .and_then(|i| PokemonType::ALL.get(i).copied());
            }
            Message::Search => match self.state.begin_search() {
                SearchStart::Restored => return self.load_sprites(),
                SearchStart::Started(id, request) => {
                    return Task::perform(
                        search(self.api.clone(), request, self.limits),
                        move |result| Message::SearchFinished(id, result),
                    );
                }
            },
            Message::SearchFinished(id, result) => {
                if self.state.finish_search(id, result) {
                    return self.load_sprites();
                }
            }
            Message::Clear => {
                self.state.reset();
                return self.load_sprites();
            }
            Message::SpriteLoaded(id, bytes) => match bytes {
                Some(bytes) => self.sprites.insert(id, bytes),
                None => self.sprites.release(id),
            },
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cosmic_theme::Spacing {
            space_xxs,
            space_s,
            space_m,
            ..
        } = theme::active().cosmic().spacing;

        let subtitle = widget::text::title3(fl!("subheading", count = self.limits.sample_size));

        let selected_type = match self.state.type_filter {
            Some(selected) => PokemonType::ALL
                .iter()
                .position(|t| *t == selected)
                .map(|i| i + 1),
            None => Some(0),
        };

        let controls = widget::row()
            .push(
                widget::text_input(fl!("search-placeholder"), &self.state.name_query)
                    .on_input(Message::NameQueryChanged)
                    .width(Length::Fixed(220.0)),
            )
            .push(widget::dropdown(
                &self.type_labels,
                selected_type,
                Message::TypeSelected,
            ))
            .push(widget::button::suggested(fl!("search")).on_press(Message::Search))
            .push(widget::button::standard(fl!("clear")).on_press(Message::Clear))
            .spacing(space_xxs)
            .align_y(Alignment::Center);

        let mut content = widget::column()
            .push(subtitle)
            .push(controls)
            .spacing(space_m)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        if self.state.is_loading() {
            content = content.push(widget::text::body(fl!("loading")));
        }

        if let Some(error) = self.state.error() {
            content = content.push(
                widget::text::body(error.message())
                    .class(theme::Text::Color(Color::from_rgb8(0xe0, 0x1b, 0x24))),
            );
        }

        let cards: Vec<Element<'_, Message>> = self
            .state
            .displayed()
            .iter()
            .map(|pokemon| self.card(pokemon, space_xxs, space_s))
            .collect();

        content
            .push(
                widget::flex_row(cards)
                    .row_spacing(space_s)
                    .column_spacing(space_s),
            )
            .into()
    }

    fn card<'a>(
        &'a self,
        pokemon: &'a PokemonSummary,
        space_xxs: u16,
        space_s: u16,
    ) -> Element<'a, Message> {
        let sprite: Element<'a, Message> = match self.sprites.get(pokemon.id) {
            Some(handle) => widget::image(handle.clone())
                .width(Length::Fixed(SPRITE_SIZE.into()))
                .height(Length::Fixed(SPRITE_SIZE.into()))
                .into(),
            None => widget::icon::from_name("image-missing-symbolic")
                .size(SPRITE_SIZE)
                .icon()
                .into(),
        };

        let details = widget::column()
            .push(sprite)
            .push(widget::text::title4(pokemon.display_name()))
            .push(widget::text::caption(fl!(
                "card-types",
                types = pokemon.display_types()
            )))
            .spacing(space_xxs)
            .align_x(Alignment::Center);

        widget::container(details)
            .class(theme::Container::Card)
            .padding(space_s)
            .width(Length::Fixed(CARD_WIDTH))
            .into()
    }

    /// Downloads the sprites of the displayed Pokémon that aren't cached yet
    fn load_sprites(&mut self) -> Task<Message> {
        let missing = self.sprites.claim_missing(self.state.displayed());

        Task::batch(missing.into_iter().map(|(id, url)| {
            Task::perform(
                download_sprite(self.api.client().clone(), url),
                move |result| match result {
                    Ok(bytes) => Message::SpriteLoaded(id, Some(bytes)),
                    Err(err) => {
                        tracing::warn!("{err}");
                        Message::SpriteLoaded(id, None)
                    }
                },
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> Fetcher {
        let api = PokeApi::new("http://127.0.0.1:1").unwrap();
        let (fetcher, _task) = Fetcher::new(api, FetchLimits::default());
        fetcher
    }

    fn pikachu() -> PokemonSummary {
        PokemonSummary {
            id: 25,
            name: String::from("pikachu"),
            image_url: None,
            types: vec![String::from("electric")],
        }
    }

    #[test]
    fn starts_loading_with_all_types_offered() {
        let fetcher = fetcher();

        assert!(fetcher.state.is_loading());
        assert_eq!(fetcher.type_labels.len(), PokemonType::ALL.len() + 1);
        assert_eq!(fetcher.type_labels[0], "All types");
        assert_eq!(fetcher.type_labels[2], "Fire");
    }

    #[test]
    fn dropdown_index_maps_to_type_filter() {
        let mut fetcher = fetcher();

        let _ = fetcher.update(Message::TypeSelected(2));
        assert_eq!(fetcher.state.type_filter, Some(PokemonType::Fire));

        let _ = fetcher.update(Message::TypeSelected(0));
        assert_eq!(fetcher.state.type_filter, None);

        let _ = fetcher.update(Message::TypeSelected(99));
        assert_eq!(fetcher.state.type_filter, None);
    }

    #[test]
    fn empty_search_shows_baseline_and_clear_resets_inputs() {
        let mut fetcher = fetcher();
        let _ = fetcher.update(Message::RandomSampleLoaded(Ok(vec![pikachu()])));
        assert!(!fetcher.state.is_loading());

        let _ = fetcher.update(Message::Search);
        assert_eq!(fetcher.state.displayed(), &[pikachu()]);
        assert!(!fetcher.state.is_loading());

        let _ = fetcher.update(Message::NameQueryChanged(String::from("vulpix")));
        let _ = fetcher.update(Message::TypeSelected(2));
        let _ = fetcher.update(Message::Search);
        assert!(fetcher.state.is_loading());

        let _ = fetcher.update(Message::Clear);
        assert!(fetcher.state.name_query.is_empty());
        assert_eq!(fetcher.state.type_filter, None);
        assert!(!fetcher.state.is_loading());
        assert_eq!(fetcher.state.displayed(), &[pikachu()]);
    }
}
