//! Platform detection and launch timing selection
//!
//! Classifies the visitor's platform from the user-agent string and exposes
//! the platform-dependent constants the app launcher needs: the store URL,
//! the fallback timeout and the blur threshold. iOS and Android browsers
//! report visibility changes with very different latencies after a custom
//! scheme navigation, so these constants differ per platform.

use serde::{Deserialize, Serialize};

use crate::services::config::AppConfig;

/// Milliseconds to wait for app-open confirmation before falling back to the
/// store. iOS suspends the page later than Android does.
pub const IOS_LAUNCH_TIMEOUT_MS: u32 = 2_600;
pub const ANDROID_LAUNCH_TIMEOUT_MS: u32 = 1_300;
pub const DEFAULT_LAUNCH_TIMEOUT_MS: u32 = 2_000;

/// Minimum time the window must stay unfocused for the focus-return path to
/// count as evidence the OS actually switched to the native app.
pub const IOS_BLUR_THRESHOLD_MS: u32 = 2_200;
pub const ANDROID_BLUR_THRESHOLD_MS: u32 = 1_400;
pub const DEFAULT_BLUR_THRESHOLD_MS: u32 = 2_000;

/// Platform classified from a user-agent string.
///
/// `Unknown` is reported for an empty or unrecognizable UA. The launcher
/// treats it exactly like `Desktop` (not mobile, no store URL, default
/// timeout), but callers can still tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Desktop,
    Unknown,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Desktop => "desktop",
            Platform::Unknown => "unknown",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }
}

/// Facts the launcher needs about the current platform. A strict projection
/// of the user-agent string; no network or stateful lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub is_mobile: bool,
    pub is_desktop: bool,
    pub user_agent: String,
}

/// Classify a raw user-agent string.
///
/// iOS device tokens win over everything, then Android. Anything else with a
/// non-empty UA is a desktop browser; an empty UA is `Unknown`.
pub fn classify_platform(user_agent: &str) -> PlatformInfo {
    let platform = if user_agent.contains("iPhone")
        || user_agent.contains("iPad")
        || user_agent.contains("iPod")
    {
        Platform::Ios
    } else if user_agent.contains("Android") {
        Platform::Android
    } else if user_agent.trim().is_empty() {
        Platform::Unknown
    } else {
        Platform::Desktop
    };

    let is_mobile = platform.is_mobile();
    PlatformInfo {
        platform,
        is_mobile,
        is_desktop: !is_mobile,
        user_agent: user_agent.to_string(),
    }
}

/// Read the navigator's user-agent and classify it.
pub fn detect_platform() -> PlatformInfo {
    let user_agent = web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    classify_platform(&user_agent)
}

/// Store URL for the platform, from configuration. Desktop and unknown
/// platforms have no store to fall back to.
pub fn store_url(platform: Platform, config: &AppConfig) -> Option<String> {
    let url = match platform {
        Platform::Ios => config.ios_store_url.as_str(),
        Platform::Android => config.android_store_url.as_str(),
        Platform::Desktop | Platform::Unknown => "",
    };
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// How long to wait before assuming the app did not open.
pub fn launch_timeout_ms(platform: Platform) -> u32 {
    match platform {
        Platform::Ios => IOS_LAUNCH_TIMEOUT_MS,
        Platform::Android => ANDROID_LAUNCH_TIMEOUT_MS,
        Platform::Desktop | Platform::Unknown => DEFAULT_LAUNCH_TIMEOUT_MS,
    }
}

/// How long the window must stay out of focus before a focus return is
/// treated as proof of a successful app switch.
pub fn blur_threshold_ms(platform: Platform) -> u32 {
    match platform {
        Platform::Ios => IOS_BLUR_THRESHOLD_MS,
        Platform::Android => ANDROID_BLUR_THRESHOLD_MS,
        Platform::Desktop | Platform::Unknown => DEFAULT_BLUR_THRESHOLD_MS,
    }
}
