use dioxus::prelude::*;

use crate::app::ua_context::UserAgentContext;
use crate::components::controls::{DownloadButton, LanguageSelector, StoreBadges};
use crate::components::display::{AppHeader, InvitationCard};
use crate::console_debug;
use crate::locale::{ui_strings, Locale};
use crate::utils::query::{invitation_code, is_webview_request};

const INVITE_PAGE_CSS: Asset = asset!("/assets/styling/invite_page.css");
const APP_LOGO: Asset = asset!("/assets/img/ideashell-logo.svg");

/// Invitation code shown when the visitor arrives without one in the URL.
const FALLBACK_INVITE_CODE: &str = "ER56Y";

#[component]
pub fn InvitePage(locale: Locale) -> Element {
    // Parse the user-agent once and share the snapshot with every child.
    let ua = use_context_provider(|| {
        #[cfg(feature = "web")]
        {
            UserAgentContext::from_navigator()
        }
        #[cfg(not(feature = "web"))]
        {
            UserAgentContext::from_raw("")
        }
    });

    #[cfg(feature = "web")]
    let search = crate::utils::query::current_search();
    #[cfg(not(feature = "web"))]
    let search = String::new();

    // Inside the ideaShell webview (or when the host asks via ?webview=true)
    // the app already provides its own chrome.
    let webview = is_webview_request(&search) || ua.is_own_app();
    let code = invitation_code(&search).unwrap_or_else(|| FALLBACK_INVITE_CODE.to_string());
    let strings = ui_strings(locale);

    let logged_ua = ua.clone();
    use_effect(move || {
        console_debug!(
            "user agent parsed: {}",
            serde_json::to_string(logged_ua.ua.as_ref()).unwrap_or_default()
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: INVITE_PAGE_CSS }

        div {
            class: "invite-page",

            if !webview {
                AppHeader { locale }
            }

            div {
                class: "hero",
                img {
                    class: "hero-logo",
                    src: APP_LOGO,
                    alt: "ideaShell"
                }
                h1 { class: "hero-title", "ideaShell" }
                p { class: "hero-subtitle", "{strings.header_slug}" }
                DownloadButton {
                    locale,
                    label: strings.open_app.to_string()
                }
                StoreBadges {}
            }

            if !webview {
                InvitationCard { locale, code }
            }

            LanguageSelector { current: locale }
        }
    }
}
