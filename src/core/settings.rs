// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    app::Settings,
    iced::{Limits, Size},
};

use crate::config::Config;

/// Window and runtime settings for the application
pub fn init(config: &Config) -> Settings {
    Settings::default()
        .size_limits(Limits::NONE.min_width(480.0).min_height(360.0))
        .size(Size::new(1024.0, 768.0))
        .theme(config.app_theme.theme())
        .debug(false)
}
