//! Todo List Frontend Entry Point

mod models;
mod todos;
mod actions;
mod store;
mod config;
mod logging;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&format!("[CONFIG] {}, using defaults", err).into());
            AppConfig::default()
        }
    };
    if let Ok(level) = config.level() {
        if let Err(err) = logging::init(level) {
            web_sys::console::error_1(&format!("[LOGGING] {}", err).into());
        }
    }
    tracing::info!(todos = config.todos.len(), "mounting todo app");

    mount_to_body(move || view! { <App config=config /> });
}
