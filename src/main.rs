// SPDX-License-Identifier: GPL-3.0-only

use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod core;
mod entities;
mod flags;
mod i18n;
mod utils;

fn main() -> cosmic::iced::Result {
    // Logs go to stderr, `RUST_LOG` overrides the default filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokefetch=info")),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    let flags = flags::flags();

    // Settings for configuring the application window and iced runtime.
    let settings = core::settings::init(&flags.config);

    // Starts the application's event loop with the loaded config as the application's flags.
    cosmic::app::run::<app::AppModel>(settings, flags)
}
