//! Mansaj Site Entry Point

mod app;
mod auth;
mod components;
mod config;
mod content;
mod content_store;
mod context;
mod editor;
mod models;
mod reveal;
mod scroll_lock;
mod scrollspy;
mod storage;
mod store;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
