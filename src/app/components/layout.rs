//! Application shell: sidebar, topbar and the routed page.

use dioxus::prelude::*;

use super::{Sidebar, Topbar};
use crate::app::Route;

/// CSS for the console (extends Pico CSS).
pub const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.shell { display: flex; min-height: 100vh; }
.sidebar { width: 220px; padding: 1.5rem 1rem; background: var(--pico-card-background-color); border-right: 1px solid var(--pico-muted-border-color); }
.sidebar a { display: block; padding: 0.5rem 0.75rem; border-radius: 6px; text-decoration: none; }
.sidebar a.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
.content { flex: 1; display: flex; flex-direction: column; }
.topbar { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; border-bottom: 1px solid var(--pico-muted-border-color); }
.topbar button { margin: 0; padding: 0.35rem 0.9rem; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; }
.stats-card h3 { margin: 0; font-size: 1.75rem; }
.banner { padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; display: flex; justify-content: space-between; }
.banner-success { background: #d1fae5; color: #065f46; }
.banner-error { background: #fee2e2; color: #991b1b; }
.banner button { margin: 0; padding: 0 0.5rem; background: none; border: none; color: inherit; }
.confirm { display: flex; gap: 0.5rem; align-items: center; }
.confirm button { margin: 0; padding: 0.25rem 0.75rem; }
small { color: var(--pico-muted-color); }
"#;

/// Layout for every protected route.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let full_title = format!("{} - Campaign Console", route.title());

    rsx! {
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        div { class: "shell",
            Sidebar { active: route.clone() }
            div { class: "content",
                Topbar {}
                main { class: "container", style: "padding-top: 1.5rem;",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
