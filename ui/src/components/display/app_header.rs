use dioxus::prelude::*;

use crate::components::controls::DownloadButton;
use crate::locale::{ui_strings, Locale};

const APP_LOGO: Asset = asset!("/assets/img/ideashell-logo.svg");

/// Sticky header with the app identity and a compact Get-App button.
/// Hidden entirely when the page runs inside the app's own webview.
#[component]
pub fn AppHeader(locale: Locale) -> Element {
    let strings = ui_strings(locale);

    rsx! {
        div {
            class: "app-header",
            div {
                class: "app-identity",
                img {
                    class: "app-logo",
                    src: APP_LOGO,
                    alt: "ideaShell"
                }
                div {
                    class: "app-names",
                    div { class: "app-name", "ideaShell" }
                    span { class: "app-slug", "{strings.header_slug}" }
                }
            }
            DownloadButton {
                locale,
                label: strings.get_app.to_string(),
                compact: true
            }
        }
    }
}
