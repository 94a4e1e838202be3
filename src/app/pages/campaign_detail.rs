//! Per-campaign statistics.

use dioxus::prelude::*;

use crate::api::{CampaignId, CampaignStats};
use crate::app::components::{BannerView, StatsCard};
use crate::app::session::use_api;
use crate::app::Route;
use crate::workflow::Banner;

/// Campaign statistics page component.
#[component]
pub fn CampaignDetail(id: CampaignId) -> Element {
    let api = use_api();
    let stats = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        async move { api.campaign_stats(id).await }
    }));

    let content = match &*stats.read() {
        None => rsx! {
            article { aria_busy: "true", "Loading statistics..." }
        },
        Some(Err(err)) => rsx! {
            BannerView { banner: Banner::error(format!("Failed to load statistics: {}", err.user_message())) }
        },
        Some(Ok(stats)) => rsx! {
            StatsBreakdown { stats: stats.clone() }
        },
    };

    rsx! {
        Link { to: Route::Campaigns {}, "← All campaigns" }
        h1 { "Campaign #{id}" }
        {content}
    }
}

#[component]
fn StatsBreakdown(stats: CampaignStats) -> Element {
    rsx! {
        div { class: "stats-grid",
            StatsCard { title: "Sent".to_string(), value: stats.sent.to_string() }
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
            StatsCard { title: "Bounces".to_string(), value: stats.bounces.to_string() }
        }
    }
}
