//! Coleta Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod location;
mod mercator;
mod models;
mod selection;
mod seq;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
