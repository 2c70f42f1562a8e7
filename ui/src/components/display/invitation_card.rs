use dioxus::prelude::*;

use crate::locale::{ui_strings, Locale};

/// Bottom card with the invitation code, a clipboard copy button and the
/// two-step claim instructions. Hidden in webview presentation.
#[component]
pub fn InvitationCard(locale: Locale, code: String) -> Element {
    let strings = ui_strings(locale);
    let mut copied = use_signal(|| false);
    let code_for_copy = code.clone();

    rsx! {
        div {
            class: "invitation-card",
            role: "region",
            "aria-label": "Invitation Card",

            div { class: "credits-banner", "{strings.credits_banner}" }

            div {
                class: "code-row",
                span { class: "invite-code", "{code}" }
                button {
                    class: "claim-button",
                    onclick: move |_| copy_code(code_for_copy.clone(), copied),
                    if copied() {
                        "{strings.copied}"
                    } else {
                        "{strings.claim_credits}"
                    }
                }
            }

            ol {
                class: "invite-steps",
                li { "{strings.step_install}" }
                li { "{strings.step_return}" }
            }
        }
    }
}

#[cfg(feature = "web")]
fn copy_code(code: String, mut copied: Signal<bool>) {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_futures::JsFuture;

    spawn(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        if JsFuture::from(clipboard.write_text(&code)).await.is_ok() {
            copied.set(true);
            TimeoutFuture::new(2_000).await;
            copied.set(false);
        }
    });
}

#[cfg(not(feature = "web"))]
fn copy_code(_code: String, _copied: Signal<bool>) {}
