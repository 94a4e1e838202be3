//! Campaign list with per-row send-now.

use dioxus::prelude::*;

use crate::api::{CampaignId, CampaignSummary};
use crate::app::components::BannerView;
use crate::app::session::use_api;
use crate::app::Route;
use crate::workflow::campaign_list::{self, CampaignBoard, CONFIRM_PROMPT};
use crate::workflow::LoadState;

/// Campaigns page component.
#[component]
pub fn Campaigns() -> Element {
    let api = use_api();
    let mut board = use_signal(CampaignBoard::default);

    {
        let api = api.clone();
        use_future(move || {
            let api = api.clone();
            async move { campaign_list::load(&board, &api).await }
        });
    }

    let refresh = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                campaign_list::load(&board, &api).await;
            });
        }
    };

    let confirm = use_callback(move |id: CampaignId| {
        let api = api.clone();
        spawn(async move {
            campaign_list::confirm_send(&board, &api, id).await;
        });
    });

    let state = board.read();
    let pending = state.pending_confirmation();

    let list = match state.campaigns() {
        LoadState::Loading => rsx! {
            article { aria_busy: "true", "Loading campaigns..." }
        },
        LoadState::Failed(message) => rsx! {
            p { class: "banner banner-error", role: "alert", "Failed to load campaigns: {message}" }
        },
        LoadState::Loaded(campaigns) if campaigns.is_empty() => rsx! {
            p { "No campaigns yet. "
                Link { to: Route::CampaignCreate {}, "Create one" }
            }
        },
        LoadState::Loaded(campaigns) => rsx! {
            table {
                thead {
                    tr {
                        th { "ID" }
                        th { "Subject" }
                        th { "Sender" }
                        th { "Created" }
                        th { "" }
                    }
                }
                tbody {
                    for campaign in campaigns.iter() {
                        CampaignRow {
                            key: "{campaign.id}",
                            sending: state.is_sending(campaign.id),
                            confirming: pending == Some(campaign.id),
                            campaign: campaign.clone(),
                            on_request: move |id| board.write().request_send(id),
                            on_confirm: move |id| confirm.call(id),
                            on_cancel: move |_| board.write().cancel_send(),
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { style: "display:flex;justify-content:space-between;align-items:center;",
            h1 { "Campaigns" }
            button { class: "secondary", onclick: refresh, "Refresh" }
        }

        if let Some(banner) = state.banner() {
            BannerView {
                banner: banner.clone(),
                on_dismiss: move |_| board.write().dismiss_banner(),
            }
        }

        {list}
    }
}

#[component]
fn CampaignRow(
    campaign: CampaignSummary,
    sending: bool,
    confirming: bool,
    on_request: EventHandler<CampaignId>,
    on_confirm: EventHandler<CampaignId>,
    on_cancel: EventHandler<()>,
) -> Element {
    let id = campaign.id;
    let created = campaign.created_display().unwrap_or_else(|| "-".to_string());

    rsx! {
        tr {
            td { "{id}" }
            td {
                Link { to: Route::CampaignDetail { id }, "{campaign.subject}" }
            }
            td { "{campaign.sender}" }
            td { "{created}" }
            td {
                if confirming {
                    div { class: "confirm",
                        small { "{CONFIRM_PROMPT}" }
                        button { onclick: move |_| on_confirm.call(id), "Send" }
                        button { class: "secondary", onclick: move |_| on_cancel.call(()), "Cancel" }
                    }
                } else {
                    button {
                        disabled: sending,
                        aria_busy: if sending { "true" } else { "false" },
                        onclick: move |_| on_request.call(id),
                        if sending { "Sending..." } else { "Send Now" }
                    }
                }
            }
        }
    }
}
