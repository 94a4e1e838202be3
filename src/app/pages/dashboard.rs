//! Dashboard page component.
//!
//! Fetches aggregate metrics once per mount. No caching.

use dioxus::prelude::*;

use crate::api::DashboardStats;
use crate::app::components::{BannerView, StatsCard};
use crate::app::session::use_api;
use crate::workflow::Banner;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let stats = use_resource(move || {
        let api = api.clone();
        async move { api.dashboard_stats().await }
    });

    let content = match &*stats.read() {
        None => rsx! {
            article { aria_busy: "true", "Loading dashboard..." }
        },
        Some(Err(err)) => rsx! {
            BannerView { banner: Banner::error(format!("Failed to load dashboard: {}", err.user_message())) }
        },
        Some(Ok(stats)) => rsx! {
            StatsGrid { stats: stats.clone() }
        },
    };

    rsx! {
        h1 { "Dashboard" }
        {content}
    }
}

#[component]
fn StatsGrid(stats: DashboardStats) -> Element {
    rsx! {
        div { class: "stats-grid",
            StatsCard { title: "Total Campaigns".to_string(), value: stats.campaigns.to_string() }
            StatsCard { title: "Total Contacts".to_string(), value: stats.contacts.to_string() }
            StatsCard { title: "Active Contacts".to_string(), value: stats.active_contacts.to_string() }
            StatsCard { title: "Emails Sent".to_string(), value: stats.sent.to_string() }
            StatsCard { title: "Delivered".to_string(), value: stats.delivered.to_string() }
            StatsCard {
                title: "Opens".to_string(),
                value: stats.opens.to_string(),
                subtitle: format!("{:.2}% open rate", stats.open_rate),
            }
            StatsCard {
                title: "Clicks".to_string(),
                value: stats.clicks.to_string(),
                subtitle: format!("{:.2}% click rate", stats.click_rate),
            }
            StatsCard { title: "Open Rate".to_string(), value: format!("{:.2}%", stats.open_rate) }
        }
    }
}
