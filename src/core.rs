// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod error;
pub mod fetcher;
pub mod image_cache;
pub mod sampling;
pub mod settings;
