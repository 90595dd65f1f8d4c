//! Licitação Report Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod dialog;
mod error;
mod format;
mod modal;
mod models;
mod render;
mod store;

use app::App;
use config::PageConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = PageConfig::from_document();
    mount_to_body(move || view! { <App config=config /> });
}
