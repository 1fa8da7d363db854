//! Ecoleta Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod geolocation;
mod models;
mod store;

use app::App;
use config::CONFIG;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
    log::info!("[APP] Ecoleta starting (api: {}, geonames: {})", CONFIG.api_url, CONFIG.geonames_url);
    mount_to_body(App);
}
