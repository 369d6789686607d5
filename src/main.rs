#![allow(warnings)]
//! Budget Tracker Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod session;
mod navigation;
mod bootstrap;
mod projects;
mod generation;
mod selector;
mod modals;
mod context;
mod store;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_document() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = rolling_logger::init(log::LevelFilter::Debug, config.log_capacity) {
        web_sys::console::error_1(&format!("logger already installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("ignoring malformed config: {}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
