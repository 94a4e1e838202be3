//! Metric card.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatsCardProps {
    pub title: String,
    pub value: String,
    /// Secondary line under the value, e.g. a rate
    #[props(default)]
    pub subtitle: Option<String>,
}

/// Single metric card.
#[component]
pub fn StatsCard(props: StatsCardProps) -> Element {
    rsx! {
        article { class: "stats-card",
            small { "{props.title}" }
            h3 { "{props.value}" }
            if let Some(subtitle) = &props.subtitle {
                small { "{subtitle}" }
            }
        }
    }
}
