//! Top bar with the signed-in account and logout.

use dioxus::prelude::*;
use tracing::info;

use crate::app::session::{use_api, use_session};
use crate::session::SessionStore;

/// Top bar component.
#[component]
pub fn Topbar() -> Element {
    let session = use_session();
    let api = use_api();

    // Identity is informational only; a failure just hides the address.
    let identity = use_resource(move || {
        let api = api.clone();
        async move { api.verify_session().await.ok() }
    });
    let email = identity.read().clone().flatten().and_then(|id| id.email);

    // The gate redirects to the login page on the next render.
    let logout = move |_| {
        info!("Logging out");
        session.clear();
    };

    rsx! {
        header { class: "topbar",
            span { class: "font-semibold", "Admin Panel" }
            div { style: "display:flex;gap:1rem;align-items:center;",
                if let Some(email) = email {
                    small { "{email}" }
                }
                button { class: "secondary", onclick: logout, "Logout" }
            }
        }
    }
}
