//! Page-level status banner.

use dioxus::prelude::*;

use crate::workflow::{Banner, Tone};

#[derive(Props, Clone, PartialEq)]
pub struct BannerViewProps {
    pub banner: Banner,
    /// Shows a close button when set
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Success or error banner.
#[component]
pub fn BannerView(props: BannerViewProps) -> Element {
    let class = match props.banner.tone {
        Tone::Success => "banner banner-success",
        Tone::Error => "banner banner-error",
    };
    let role = if props.banner.is_error() { "alert" } else { "status" };

    rsx! {
        div { class, role,
            span { "{props.banner.text}" }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    aria_label: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
