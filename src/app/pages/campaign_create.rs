//! Campaign composer page.
//!
//! Create and test-send are independent; test-send needs a created id.

use dioxus::prelude::*;

use crate::app::components::BannerView;
use crate::app::session::use_api;
use crate::workflow::campaign::{self, CampaignComposer, SUBJECT_MAX_CHARS};

/// Create campaign page component.
#[component]
pub fn CampaignCreate() -> Element {
    let api = use_api();
    let mut composer = use_signal(CampaignComposer::default);

    let on_create = {
        let api = api.clone();
        move |e: FormEvent| {
            e.prevent_default();
            let api = api.clone();
            spawn(async move {
                campaign::create(&composer, &api).await;
            });
        }
    };

    let on_send_test = move |_| {
        let api = api.clone();
        spawn(async move {
            campaign::send_test(&composer, &api).await;
        });
    };

    let state = composer.read();
    let creating = state.is_creating();
    let sending_test = state.is_sending_test();
    let subject_len = state.draft.subject.chars().count();

    rsx! {
        h1 { "Create Campaign" }

        if let Some(banner) = state.banner() {
            BannerView { banner: banner.clone() }
        }

        form { onsubmit: on_create,
            label { "Subject"
                input {
                    r#type: "text",
                    maxlength: "{SUBJECT_MAX_CHARS}",
                    value: "{state.draft.subject}",
                    oninput: move |e| composer.write().draft.subject = e.value(),
                }
                small { "{subject_len}/{SUBJECT_MAX_CHARS}" }
            }
            label { "Sender email"
                input {
                    r#type: "email",
                    placeholder: "news@example.com",
                    value: "{state.draft.sender}",
                    oninput: move |e| composer.write().draft.sender = e.value(),
                }
            }
            label { "HTML body"
                textarea {
                    rows: "12",
                    value: "{state.draft.html_body}",
                    oninput: move |e| composer.write().draft.html_body = e.value(),
                }
            }
            button {
                r#type: "submit",
                disabled: creating,
                aria_busy: if creating { "true" } else { "false" },
                if creating { "Creating..." } else { "Create Campaign" }
            }
        }

        if let Some(id) = state.campaign_id() {
            article {
                h2 { "Send a test" }
                small { "Campaign #{id}" }
                div { role: "group",
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{state.test_recipient}",
                        oninput: move |e| composer.write().test_recipient = e.value(),
                    }
                    button {
                        disabled: !state.can_send_test(),
                        aria_busy: if sending_test { "true" } else { "false" },
                        onclick: on_send_test,
                        if sending_test { "Sending..." } else { "Send Test" }
                    }
                }
            }
        }
    }
}
