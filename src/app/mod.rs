//! Dioxus client application.
//!
//! The root resolves the client configuration, installs the session and
//! API client contexts, and mounts the router. Every route sits under
//! [`Gate`], which applies the route guard on each render.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod session;

use crate::api::CampaignId;
use crate::guard::GuardedRoute;
use components::{Gate, Shell};
use pages::{
    CampaignCreate, CampaignDetail, Campaigns, Contacts, Dashboard, Login, Misconfigured, NotFound,
};
use session::use_console_provider;

/// Root app component.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| crate::config::resolve().map_err(|e| e.to_string()));

    match config {
        Ok(config) => rsx! {
            Console { config }
        },
        Err(message) => rsx! {
            Misconfigured { message }
        },
    }
}

#[component]
fn Console(config: crate::config::ClientConfig) -> Element {
    use_console_provider(&config);

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Gate)]
        #[route("/login")]
        Login {},
        #[layout(Shell)]
            #[route("/")]
            Dashboard {},
            #[route("/contacts")]
            Contacts {},
            #[route("/campaign/create")]
            CampaignCreate {},
            #[route("/campaigns")]
            Campaigns {},
            #[route("/campaigns/:id")]
            CampaignDetail { id: CampaignId },
            #[route("/:..segments")]
            NotFound { segments: Vec<String> },
}

impl Route {
    /// Browser tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login {} => "Sign in",
            Route::Dashboard {} => "Dashboard",
            Route::Contacts {} => "Contacts",
            Route::CampaignCreate {} => "Create Campaign",
            Route::Campaigns {} => "Campaigns",
            Route::CampaignDetail { .. } => "Campaign Statistics",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

impl GuardedRoute for Route {
    fn login() -> Self {
        Route::Login {}
    }

    fn home() -> Self {
        Route::Dashboard {}
    }

    fn is_protected(&self) -> bool {
        !matches!(self, Route::Login {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{decide, GuardDecision};

    fn protected_routes() -> Vec<Route> {
        vec![
            Route::Dashboard {},
            Route::Contacts {},
            Route::CampaignCreate {},
            Route::Campaigns {},
            Route::CampaignDetail { id: 7 },
            Route::NotFound {
                segments: vec!["nope".to_string()],
            },
        ]
    }

    #[test]
    fn test_every_route_but_login_is_protected() {
        assert!(!Route::Login {}.is_protected());
        for route in protected_routes() {
            assert!(route.is_protected(), "{:?} should be protected", route);
        }
    }

    #[test]
    fn test_guard_over_route_table() {
        for route in protected_routes() {
            assert_eq!(decide(&route, false), GuardDecision::Redirect(Route::Login {}));
            assert_eq!(decide(&route, true), GuardDecision::Render);
        }
        assert_eq!(decide(&Route::Login {}, true), GuardDecision::Redirect(Route::Dashboard {}));
    }

    #[test]
    fn test_paths_parse() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Dashboard {}));
        assert_eq!(
            "/campaigns/12".parse::<Route>().ok(),
            Some(Route::CampaignDetail { id: 12 })
        );
        assert_eq!(
            "/campaign/create".parse::<Route>().ok(),
            Some(Route::CampaignCreate {})
        );
        assert!(matches!(
            "/does/not/exist".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
