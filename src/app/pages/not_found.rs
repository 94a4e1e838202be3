//! Fallback for unknown paths.

use dioxus::prelude::*;

use crate::app::Route;

/// Not-found panel, rendered inside the shell.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        article {
            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
