//! WeFamily Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod family_tree;
mod forms;
mod logging;
mod models;
mod notify;
mod pages;
mod profile_editor;
mod query;
mod routing;
mod selection;
mod storage;
mod store;
mod uploads;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init_logging(config.log_level);
    if let Some(raw) = option_env!("WEFAMILY_LOG_LEVEL") {
        if config::parse_level(raw).is_none() {
            log::warn!("unknown log level {:?}, using info", raw);
        }
    }
    log::info!("backend at {}", config.backend_url);

    mount_to_body(move || view! { <App config=config /> });
}
