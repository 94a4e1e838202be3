//! Campaign Console
//!
//! Launches the Dioxus client. The renderer comes from the `web` or
//! `desktop` feature.

use dioxus::logger::tracing::{info, Level};

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Campaign Console");

    dioxus::launch(campaign_console::app::App);
}
