//! Resume Assist Web App (Leptos + WASM)

mod actions;
mod api;
mod app;
mod browser;
mod components;
mod config;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
