// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use cosmic::app::context_drawer;
use cosmic::cosmic_config;
use cosmic::iced::alignment::{Horizontal, Vertical};
use cosmic::iced::{Length, Subscription, Task};
use cosmic::widget::{self, about::About, menu};
use cosmic::{Application, ApplicationExt, Apply, Element, cosmic_theme, theme};

use crate::app::app_menu::MenuAction;
use crate::app::context_page::ContextPage;
use crate::app::fetcher::Fetcher;
use crate::config::{AppTheme, Config};
use crate::core::api::{DEFAULT_API_URL, PokeApi};
use crate::fl;
use crate::flags::Flags;

mod app_menu;
mod context_page;
mod fetcher;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const POKEAPI: &str = "https://pokeapi.co";
const APP_ICON: &[u8] = include_bytes!("../res/icons/hicolor/scalable/apps/dev.mariinkys.PokeFetch.svg");

/// The root of the application: window chrome, the heading, and the mounted [`Fetcher`]
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration handler, `None` when cosmic-config is unavailable
    config_handler: Option<cosmic_config::Config>,
    /// Configuration data that persists between application runs.
    config: Config,
    /// Labels of the theme dropdown, in [`AppTheme::ALL`] order
    theme_labels: Vec<String>,
    /// Application State
    state: State,
}

/// Whether the Pokémon page could be mounted
pub enum State {
    Ready(Fetcher),
    /// The PokéAPI client could not be built, holds the reason
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),
    ThemeSelected(usize),
    Fetcher(fetcher::Message),
}

impl Application for AppModel {
    type Executor = cosmic::executor::Default;

    type Flags = Flags;

    type Message = Message;

    const APP_ID: &'static str = "dev.mariinkys.PokeFetch";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    fn init(core: cosmic::Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY), (fl!("pokeapi"), POKEAPI)])
            .license(env!("CARGO_PKG_LICENSE"));

        let api = PokeApi::new(&flags.config.api_url).or_else(|err| {
            tracing::warn!("{err}, falling back to {DEFAULT_API_URL}");
            PokeApi::new(DEFAULT_API_URL)
        });

        let (state, fetcher_task) = match api {
            Ok(api) => {
                let (fetcher, task) = Fetcher::new(api, flags.config.limits());
                (
                    State::Ready(fetcher),
                    task.map(|message| cosmic::Action::App(Message::Fetcher(message))),
                )
            }
            Err(err) => {
                tracing::error!("could not create the PokéAPI client: {err}");
                (State::Unavailable(err.to_string()), Task::none())
            }
        };

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            key_binds: HashMap::new(),
            config_handler: flags.config_handler,
            config: flags.config,
            theme_labels: AppTheme::ALL.iter().map(|t| t.label()).collect(),
            state,
        };

        let title_task = app.update_title();

        (app, Task::batch(vec![title_task, fetcher_task]))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![
                    menu::Item::Button(fl!("about"), None, MenuAction::About),
                    menu::Item::Button(fl!("settings"), None, MenuAction::Settings),
                ],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        self.context_page.display(self)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let cosmic_theme::Spacing { space_m, .. } = theme::active().cosmic().spacing;

        let heading = widget::text::title1(fl!("heading"))
            .apply(widget::container)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let page: Element<'_, Self::Message> = match &self.state {
            State::Ready(fetcher) => fetcher.view().map(Message::Fetcher),
            State::Unavailable(reason) => widget::text::body(reason.as_str())
                .apply(widget::container)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into(),
        };

        widget::column()
            .push(heading)
            .push(page)
            .spacing(space_m)
            .padding(space_m)
            .apply(widget::scrollable)
            .into()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::LaunchUrl(url) => {
                if let Err(err) = open::that_detached(&url) {
                    tracing::error!("failed to open {url:?}: {err}");
                }
            }
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    // Close the context drawer if the toggled context page is the same.
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    // Open the context drawer to display the requested context page.
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }
            Message::UpdateConfig(config) => {
                let theme_changed = config.app_theme != self.config.app_theme;
                self.config = config;

                if theme_changed {
                    return cosmic::command::set_theme(self.config.app_theme.theme());
                }
            }
            Message::ThemeSelected(index) => {
                let Some(app_theme) = AppTheme::ALL.get(index).copied() else {
                    return Task::none();
                };

                if let Some(handler) = &self.config_handler {
                    if let Err(err) = self.config.set_app_theme(handler, app_theme) {
                        tracing::error!("failed to save theme: {err}");
                    }
                } else {
                    self.config.app_theme = app_theme;
                }

                return cosmic::command::set_theme(app_theme.theme());
            }
            Message::Fetcher(message) => {
                if let State::Ready(fetcher) = &mut self.state {
                    return fetcher
                        .update(message)
                        .map(|message| cosmic::Action::App(Message::Fetcher(message)));
                }
            }
        }

        Task::none()
    }
}

impl AppModel {
    /// Settings page of the context drawer
    pub fn settings(&self) -> Element<'_, Message> {
        let selected_theme = AppTheme::ALL
            .iter()
            .position(|t| *t == self.config.app_theme);

        widget::settings::view_column(vec![
            widget::settings::section()
                .title(fl!("appearance"))
                .add(widget::settings::item(
                    fl!("theme"),
                    widget::dropdown(&self.theme_labels, selected_theme, Message::ThemeSelected),
                ))
                .into(),
        ])
        .into()
    }

    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let window_title = fl!("app-title");
        self.set_header_title(window_title.clone());

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }
}
