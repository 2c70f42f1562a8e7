use dioxus::prelude::*;

use crate::app::use_user_agent;
use crate::components::overlay::BrowserGuideOverlay;
use crate::locale::Locale;

/// The button that drives the whole launch flow. In a normal mobile
/// browser a click attempts the deep link with store fallback; inside
/// WeChat it shows the open-in-system-browser guide instead, since custom
/// schemes go nowhere there. The button disables itself while a launch is
/// in flight so rapid taps cannot spawn overlapping sessions.
#[component]
pub fn DownloadButton(
    locale: Locale,
    label: String,
    #[props(default = false)] compact: bool,
) -> Element {
    let ua = use_user_agent();
    let mut launching = use_signal(|| false);
    let mut show_guide = use_signal(|| false);

    let is_wechat = ua.is_wechat();
    let onclick = move |_| {
        if is_wechat {
            show_guide.set(true);
            return;
        }
        if launching() {
            return;
        }
        launching.set(true);
        start_launch(launching);
    };

    rsx! {
        button {
            class: if compact { "download-button compact" } else { "download-button" },
            disabled: launching(),
            "aria-label": "Download or open ideaShell app",
            onclick: onclick,
            "{label}"
        }
        if show_guide() {
            BrowserGuideOverlay {
                locale,
                on_dismiss: move |_| show_guide.set(false)
            }
        }
    }
}

#[cfg(feature = "web")]
fn start_launch(mut launching: Signal<bool>) {
    use std::rc::Rc;

    use crate::launcher::{launch_with_fallback, LaunchConfig};
    use crate::services::config::AppConfig;
    use crate::utils::query::{current_search, invitation_code};
    use crate::{console_error, console_info};

    spawn(async move {
        let config = AppConfig::default();
        let mut params = Vec::new();
        if let Some(code) = invitation_code(&current_search()) {
            params.push(("code".to_string(), code));
        }

        let launch = LaunchConfig {
            deep_link: Some(config.deep_link_url.clone()),
            deep_link_params: params,
            on_success: Some(Rc::new(|| console_info!("app launch confirmed"))),
            on_fallback: Some(Rc::new(|| console_info!("store fallback taken"))),
            on_error: Some(Rc::new(|error| console_error!("launch failed: {}", error))),
            ..LaunchConfig::default()
        };

        let result = launch_with_fallback(&config, launch).await;
        console_info!(
            "launch resolved: {}",
            serde_json::to_string(&result).unwrap_or_default()
        );
        launching.set(false);
    });
}

#[cfg(not(feature = "web"))]
fn start_launch(mut launching: Signal<bool>) {
    launching.set(false);
}
