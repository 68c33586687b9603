// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry},
    theme,
};
use serde::{Deserialize, Serialize};

use crate::{
    core::{api::DEFAULT_API_URL, fetcher::FetchLimits},
    fl,
};

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    pub app_theme: AppTheme,
    pub api_url: String,
    pub listing_limit: usize,
    pub sample_size: usize,
    pub type_result_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        let limits = FetchLimits::default();

        Self {
            app_theme: Default::default(),
            api_url: String::from(DEFAULT_API_URL),
            listing_limit: limits.listing_limit,
            sample_size: limits.sample_size,
            type_result_limit: limits.type_result_limit,
        }
    }
}

impl Config {
    /// Loads the config (or the default one) along with its handler
    pub fn load(app_id: &str) -> (Option<cosmic_config::Config>, Config) {
        match cosmic_config::Config::new(app_id, Self::VERSION) {
            Ok(config_handler) => {
                let config = match Config::get_entry(&config_handler) {
                    Ok(ok) => ok,
                    Err((errs, config)) => {
                        tracing::error!("errors loading config: {:?}", errs);
                        config
                    }
                };
                (Some(config_handler), config)
            }
            Err(err) => {
                tracing::error!("failed to create config handler: {}", err);
                (None, Config::default())
            }
        }
    }

    /// Fetch sizes, with zero values falling back to the defaults
    pub fn limits(&self) -> FetchLimits {
        let defaults = FetchLimits::default();
        let or_default = |value: usize, default: usize| if value == 0 { default } else { value };

        FetchLimits {
            listing_limit: or_default(self.listing_limit, defaults.listing_limit),
            sample_size: or_default(self.sample_size, defaults.sample_size),
            type_result_limit: or_default(self.type_result_limit, defaults.type_result_limit),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppTheme {
    Dark,
    Light,
    #[default]
    System,
}

impl AppTheme {
    /// Themes in the order the settings dropdown lists them
    pub const ALL: &'static [Self] = &[Self::System, Self::Dark, Self::Light];

    pub fn label(&self) -> String {
        match self {
            Self::Dark => fl!("theme-dark"),
            Self::Light => fl!("theme-light"),
            Self::System => fl!("theme-system"),
        }
    }

    pub fn theme(&self) -> theme::Theme {
        match self {
            Self::Dark => theme::Theme::dark(),
            Self::Light => theme::Theme::light(),
            Self::System => theme::system_preference(),
        }
    }
}
