//! Sidebar navigation.

use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Current route, used to highlight its entry
    pub active: Route,
}

/// Section of the console a route belongs to.
fn section(route: &Route) -> Option<&'static str> {
    match route {
        Route::Dashboard {} => Some("dashboard"),
        Route::Contacts {} => Some("contacts"),
        Route::CampaignCreate {} => Some("create"),
        Route::Campaigns {} | Route::CampaignDetail { .. } => Some("campaigns"),
        Route::Login {} | Route::NotFound { .. } => None,
    }
}

/// Sidebar with one link per console section.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let active = section(&props.active);
    let link_class = |id: &str| if active == Some(id) { "active" } else { "" };

    rsx! {
        aside { class: "sidebar",
            h2 { style: "font-size: 1.2rem;", "Campaign Console" }
            nav {
                Link { class: link_class("dashboard").to_string(), to: Route::Dashboard {}, "Dashboard" }
                Link { class: link_class("contacts").to_string(), to: Route::Contacts {}, "Upload Contacts" }
                Link { class: link_class("create").to_string(), to: Route::CampaignCreate {}, "Create Campaign" }
                Link { class: link_class("campaigns").to_string(), to: Route::Campaigns {}, "Campaigns" }
            }
        }
    }
}
