// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config;

use crate::{app::AppModel, config::Config};

/// Flags given to our COSMIC application to use in it's "init" function.
#[derive(Clone, Debug)]
pub struct Flags {
    pub config_handler: Option<cosmic_config::Config>,
    pub config: Config,
}

pub fn flags() -> Flags {
    let (config_handler, config) = Config::load(<AppModel as cosmic::Application>::APP_ID);

    Flags {
        config_handler,
        config,
    }
}
