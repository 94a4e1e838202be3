//! Route guard layout.

use dioxus::prelude::*;
use tracing::warn;

use crate::app::session::use_session;
use crate::app::Route;
use crate::guard::{self, GuardDecision};

/// Wraps every route. Re-evaluates on each render and on every session write.
#[component]
pub fn Gate() -> Element {
    let session = use_session();
    session.track();
    let route = use_route::<Route>();

    match guard::evaluate(&route, &session) {
        GuardDecision::Render => rsx! {
            Outlet::<Route> {}
        },
        GuardDecision::Redirect(to) => rsx! {
            Redirect { to }
        },
    }
}

/// Replaces the current history entry once mounted.
#[component]
fn Redirect(to: Route) -> Element {
    use_effect(move || {
        if let Some(failure) = navigator().replace(to.clone()) {
            warn!(?failure, "Guard redirect failed");
        }
    });

    rsx! {}
}
