//! Shown instead of the app when the client configuration is unusable.

use dioxus::prelude::*;

use crate::app::components::CUSTOM_STYLES;
use crate::config::BASE_URL_ENV;

/// Misconfiguration screen.
#[component]
pub fn Misconfigured(message: String) -> Element {
    rsx! {
        document::Title { "Misconfigured - Campaign Console" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        main { class: "container", style: "padding-top: 10vh;",
            article {
                h1 { "Console is misconfigured" }
                p { class: "banner banner-error", role: "alert", "{message}" }
                p {
                    "Set " code { "{BASE_URL_ENV}" } " to the backend URL and rebuild."
                }
            }
        }
    }
}
