//! Login page component.

use dioxus::prelude::*;

use crate::app::components::CUSTOM_STYLES;
use crate::app::session::{use_api, use_session};
use crate::workflow::login::{self, LoginForm};

/// Login page. A stored token makes the gate move on to the dashboard.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let mut form = use_signal(LoginForm::default);

    let submitting = form.read().is_submitting();
    let error = form.read().error().map(str::to_string);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            login::submit(&form, &api, &session).await;
        });
    };

    rsx! {
        document::Title { "Sign in - Campaign Console" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        main { class: "container", style: "max-width: 420px; padding-top: 10vh;",
            article {
                h1 { "Admin Login" }
                if let Some(error) = error {
                    p { class: "banner banner-error", role: "alert", "{error}" }
                }
                form { onsubmit,
                    label { "Email"
                        input {
                            r#type: "email",
                            autocomplete: "username",
                            value: "{form.read().email}",
                            oninput: move |e| form.write().email = e.value(),
                        }
                    }
                    label { "Password"
                        input {
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{form.read().password}",
                            oninput: move |e| form.write().password = e.value(),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: submitting,
                        aria_busy: if submitting { "true" } else { "false" },
                        if submitting { "Signing in..." } else { "Login" }
                    }
                }
            }
        }
    }
}
