use dioxus::prelude::*;

use crate::app::use_user_agent;
use crate::services::config::AppConfig;

/// Direct store links for desktop visitors, where a deep-link attempt has
/// nothing to fall back to. Mobile visitors go through the launch flow
/// instead, so the badges render nothing there.
#[component]
pub fn StoreBadges() -> Element {
    let ua = use_user_agent();
    if ua.platform.is_mobile {
        return rsx! {};
    }

    let config = AppConfig::default();
    let ios_url = config.ios_store_url.clone();
    let android_url = config.android_store_url.clone();

    rsx! {
        div {
            class: "store-badges",
            button {
                class: "store-badge",
                onclick: move |_| open_platform_store(ios_url.clone()),
                "App Store"
            }
            button {
                class: "store-badge",
                onclick: move |_| open_platform_store(android_url.clone()),
                "Google Play"
            }
        }
    }
}

#[cfg(feature = "web")]
fn open_platform_store(url: String) {
    use crate::console_error;
    use crate::launcher::open_store;

    let config = AppConfig::default();
    if let Err(error) = open_store(&config, Some(&url)) {
        console_error!("store open failed: {}", error);
    }
}

#[cfg(not(feature = "web"))]
fn open_platform_store(_url: String) {}
