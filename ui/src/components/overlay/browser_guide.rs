use dioxus::prelude::*;

use crate::locale::{ui_strings, Locale};

/// Full-screen guide shown inside disallowed in-app browsers (WeChat):
/// points at the ··· menu and asks the visitor to reopen the page in the
/// system browser, where the deep link can actually work.
#[component]
pub fn BrowserGuideOverlay(locale: Locale, on_dismiss: EventHandler<()>) -> Element {
    let strings = ui_strings(locale);

    rsx! {
        div {
            class: "browser-guide-overlay",
            onclick: move |_| on_dismiss.call(()),
            div {
                class: "browser-guide-content",
                svg {
                    class: "browser-guide-arrow",
                    view_box: "0 0 100 100",
                    fill: "none",
                    path {
                        d: "M60 10 L90 20 L80 50",
                        stroke: "currentColor",
                        stroke_width: "4",
                        stroke_linecap: "round",
                        stroke_linejoin: "round"
                    }
                    path {
                        d: "M90 20 C 90 20 50 40 30 90",
                        stroke: "currentColor",
                        stroke_width: "4",
                        stroke_linecap: "round",
                        stroke_dasharray: "10 10"
                    }
                }
                p { class: "browser-guide-title", "{strings.wechat_guide_title}" }
                p { class: "browser-guide-subtitle", "{strings.wechat_guide_subtitle}" }
            }
        }
    }
}
