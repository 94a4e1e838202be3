//! Contacts page: CSV upload.

use dioxus::prelude::*;
use tracing::warn;

use crate::app::components::BannerView;
use crate::app::session::use_api;
use crate::workflow::upload::{self, SelectedFile, UploadWorkflow};

/// Contacts upload page component.
#[component]
pub fn Contacts() -> Element {
    let api = use_api();
    let mut workflow = use_signal(UploadWorkflow::default);

    let on_file = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => workflow
                    .write()
                    .select_file(SelectedFile::new(file.name(), bytes.to_vec())),
                Err(err) => {
                    warn!(file = %file.name(), error = %err, "Could not read selected file");
                    workflow.write().reject_file(&err.to_string());
                }
            }
        });
    };

    let on_upload = move |_| {
        let api = api.clone();
        spawn(async move {
            upload::submit(&workflow, &api).await;
        });
    };

    let state = workflow.read();
    let uploading = state.is_uploading();

    rsx! {
        h1 { "Upload Contacts" }
        p { "CSV with an " code { "email" } " column. Duplicates are skipped by the server." }

        if let Some(banner) = state.banner() {
            BannerView { banner: banner.clone() }
        }

        article {
            input {
                r#type: "file",
                accept: ".csv,text/csv",
                disabled: uploading,
                onchange: on_file,
            }
            if let Some(file) = state.selected() {
                p {
                    strong { "{file.name}" }
                    small { " ({file.size_label()})" }
                }
            }
            button {
                disabled: !state.can_submit(),
                aria_busy: if uploading { "true" } else { "false" },
                onclick: on_upload,
                if uploading { "Uploading..." } else { "Upload" }
            }
        }

        if let Some(outcome) = state.outcome() {
            article {
                h2 { "Upload Results" }
                table {
                    tbody {
                        tr { th { "Total rows" } td { "{outcome.total}" } }
                        tr { th { "Inserted" } td { "{outcome.inserted}" } }
                        tr { th { "Skipped" } td { "{outcome.skipped}" } }
                    }
                }
            }
        }
    }
}
