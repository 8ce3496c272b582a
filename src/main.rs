//! Shelf-Sort Frontend Entry Point

mod app;
mod board;
mod catalog;
mod components;
mod context;
mod drag;
mod export;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
