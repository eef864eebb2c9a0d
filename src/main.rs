//! TaskMate Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod edit;
mod models;
mod store;
mod suggestion;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
