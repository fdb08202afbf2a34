//! Storefront web client
//!
//! Leptos CSR app with three working screens (login, registration, product
//! ordering) and a home page. Talks to the storefront backend over HTTP and
//! keeps the bearer token in `localStorage`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use config::ApiConfig;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages in the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!(
        "Storefront starting (API base URL: {})",
        ApiConfig::from_build_env().base_url()
    );

    leptos::mount::mount_to_body(|| view! { <App/> });
}
