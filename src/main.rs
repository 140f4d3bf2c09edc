#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod fragments;
mod pages;
mod theme;

use tracing::Level;

fn main() {
    // a subscriber may already be installed by the dev server's hot reload
    let _ = dioxus::logger::init(Level::INFO);

    tracing::info!("Starting folio-web");

    dioxus::LaunchBuilder::web().launch(app::App);
}
