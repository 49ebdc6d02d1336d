#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;
mod tracking;

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("Logger not installed: {e}").into());
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting folio");

    dioxus::LaunchBuilder::web().launch(app::App);
}
