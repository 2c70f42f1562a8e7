//! User-Agent parser for ideaShell webview detection
//!
//! The ideaShell apps append a product token to their webview user-agent:
//!
//! ```text
//! ideaShell/2.5.8(258) NetType/WIFI Language/zh_CN Device/iPhone16,2
//! ideaShellCN/2.5.8(258) NetType/5G Language/zh_CN ABI/arm64
//! ```
//!
//! This module extracts that token plus the platform-specific fields around
//! it into an immutable [`UaInfo`] snapshot. Parsing is total: a pattern
//! that does not match simply leaves its field unset.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::platform::Platform;

// ideaShell product token: ideaShell/{version}({build}) or ideaShellCN/...
static OWN_APP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ideaShell(CN)?/([0-9.]+)\((\d+)\)").unwrap());

// iOS
static IOS_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"CPU (?:iPhone )?OS ([0-9_]+)").unwrap());
static IOS_DEVICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Device/([^\s]+)").unwrap());
static SAFARI_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Version/([0-9.]+)").unwrap());

// Android
static ANDROID_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Android ([0-9.]+)").unwrap());
static ANDROID_DEVICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Android [0-9.]+; ([^)]+?)(?: Build|;|\))").unwrap());
static CHROME_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Chrome/([0-9.]+)").unwrap());
static ABI: Lazy<Regex> = Lazy::new(|| Regex::new(r"ABI/([^\s]+)").unwrap());

// Common, platform independent
static NET_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"NetType/([^\s]+)").unwrap());
static LANGUAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Language/([^\s]+)").unwrap());

/// In-app browsers known to block or mishandle custom-scheme navigation.
/// WeChat is the one that matters for this page.
const WECHAT_SIGNATURE: &str = "MicroMessenger";

/// Parsed snapshot of one user-agent string. Constructed fresh per string,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UaInfo {
    /// Whether this page runs inside the ideaShell webview.
    pub is_own_app: bool,

    /// Whether the CN product variant (`ideaShellCN`) was matched.
    pub is_cn: bool,

    /// Whether this is a disallowed third-party in-app browser (WeChat).
    /// Independent of `is_own_app`; in practice the two never co-occur.
    pub is_wechat: bool,

    /// Platform as far as the UA string alone can tell. The parser never
    /// claims `Desktop`; that projection belongs to the platform detector.
    pub platform: Platform,

    /// ideaShell app version, e.g. "2.5.8".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,

    /// ideaShell build number, e.g. "258".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_number: Option<String>,

    /// Device model: "iPhone16,2" (iOS, `Device/` token) or "SM-G998B"
    /// (Android, from the platform segment).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,

    /// Network type token, e.g. "WIFI", "4G", "5G".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_type: Option<String>,

    /// Language token, e.g. "zh_CN", "en_US".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Android ABI token, e.g. "arm64".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abi: Option<String>,

    /// iOS version with dots, e.g. "17.5".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_version: Option<String>,

    /// Android OS version, e.g. "13".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_version: Option<String>,

    /// Chrome version (Android).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_version: Option<String>,

    /// Safari/WebKit version (iOS).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_version: Option<String>,

    /// The raw user-agent string this snapshot was derived from.
    pub raw_ua: String,
}

impl UaInfo {
    pub fn is_mobile(&self) -> bool {
        self.platform.is_mobile()
    }

    /// OS version regardless of platform.
    pub fn os_version(&self) -> Option<&str> {
        self.ios_version
            .as_deref()
            .or(self.android_version.as_deref())
    }
}

fn capture(re: &Regex, ua: &str) -> Option<String> {
    re.captures(ua)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse a user-agent string into a [`UaInfo`]. Pure and total.
pub fn parse_user_agent(ua: &str) -> UaInfo {
    let mut info = UaInfo {
        is_own_app: false,
        is_cn: false,
        is_wechat: ua.contains(WECHAT_SIGNATURE),
        platform: Platform::Unknown,
        app_version: None,
        build_number: None,
        device_model: None,
        net_type: None,
        language: None,
        abi: None,
        ios_version: None,
        android_version: None,
        chrome_version: None,
        safari_version: None,
        raw_ua: ua.to_string(),
    };

    if let Some(caps) = OWN_APP.captures(ua) {
        info.is_own_app = true;
        info.is_cn = caps.get(1).is_some();
        info.app_version = caps.get(2).map(|m| m.as_str().to_string());
        info.build_number = caps.get(3).map(|m| m.as_str().to_string());
    }

    if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("iPod") {
        info.platform = Platform::Ios;
        parse_ios_fields(ua, &mut info);
    } else if ua.contains("Android") {
        info.platform = Platform::Android;
        parse_android_fields(ua, &mut info);
    }

    info.net_type = capture(&NET_TYPE, ua);
    info.language = capture(&LANGUAGE, ua);

    info
}

fn parse_ios_fields(ua: &str, info: &mut UaInfo) {
    info.ios_version = capture(&IOS_VERSION, ua).map(|v| v.replace('_', "."));
    info.device_model = capture(&IOS_DEVICE, ua);
    info.safari_version = capture(&SAFARI_VERSION, ua);
}

fn parse_android_fields(ua: &str, info: &mut UaInfo) {
    info.android_version = capture(&ANDROID_VERSION, ua);
    info.device_model = capture(&ANDROID_DEVICE, ua).map(|m| m.trim().to_string());
    info.chrome_version = capture(&CHROME_VERSION, ua);
    info.abi = capture(&ABI, ua);
}

/// Quick check for the ideaShell webview without a full parse.
pub fn is_own_app_webview(ua: &str) -> bool {
    OWN_APP.is_match(ua)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IOS_SHELL_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 \
         ideaShell/2.5.8(258) NetType/WIFI Language/zh_CN Device/iPhone16,2";

    const ANDROID_SHELL_CN_UA: &str = "Mozilla/5.0 (Linux; Android 13; SM-G998B Build/TP1A.220624.014; wv) \
         AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/130.0.6723.58 Mobile Safari/537.36 \
         ideaShellCN/2.5.8(258) NetType/5G Language/zh_CN ABI/arm64";

    const WECHAT_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 MicroMessenger/8.0.47(0x18002f2c) \
         NetType/WIFI Language/zh_CN";

    const PLAIN_DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
         AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36";

    #[test]
    fn parses_ios_own_app_token() {
        let info = parse_user_agent(IOS_SHELL_UA);
        assert!(info.is_own_app);
        assert!(!info.is_cn);
        assert_eq!(info.app_version.as_deref(), Some("2.5.8"));
        assert_eq!(info.build_number.as_deref(), Some("258"));
        assert_eq!(info.platform, Platform::Ios);
        assert_eq!(info.ios_version.as_deref(), Some("17.5"));
        assert_eq!(info.device_model.as_deref(), Some("iPhone16,2"));
        assert_eq!(info.safari_version.as_deref(), Some("17.5"));
        assert_eq!(info.net_type.as_deref(), Some("WIFI"));
        assert_eq!(info.language.as_deref(), Some("zh_CN"));
    }

    #[test]
    fn parses_android_cn_variant() {
        let info = parse_user_agent(ANDROID_SHELL_CN_UA);
        assert!(info.is_own_app);
        assert!(info.is_cn);
        assert_eq!(info.app_version.as_deref(), Some("2.5.8"));
        assert_eq!(info.build_number.as_deref(), Some("258"));
        assert_eq!(info.platform, Platform::Android);
        assert_eq!(info.android_version.as_deref(), Some("13"));
        assert_eq!(info.device_model.as_deref(), Some("SM-G998B"));
        assert_eq!(info.chrome_version.as_deref(), Some("130.0.6723.58"));
        assert_eq!(info.abi.as_deref(), Some("arm64"));
        assert_eq!(info.net_type.as_deref(), Some("5G"));
    }

    #[test]
    fn wechat_is_flagged_independently() {
        let info = parse_user_agent(WECHAT_UA);
        assert!(info.is_wechat);
        assert!(!info.is_own_app);
        assert_eq!(info.platform, Platform::Ios);
    }

    #[test]
    fn plain_browser_has_nothing_set() {
        let info = parse_user_agent(PLAIN_DESKTOP_UA);
        assert!(!info.is_own_app);
        assert!(!info.is_wechat);
        assert_eq!(info.platform, Platform::Unknown);
        assert_eq!(info.app_version, None);
        assert_eq!(info.device_model, None);
        assert_eq!(info.language, None);
    }

    #[test]
    fn parsing_is_total_on_garbage() {
        for ua in ["", "ideaShell/", "ideaShell/2.5.8", "Android", "\u{0}\u{1}"] {
            let info = parse_user_agent(ua);
            assert_eq!(info.raw_ua, ua);
        }
        // A bare version without a build number is not the product token.
        assert!(!parse_user_agent("ideaShell/2.5.8").is_own_app);
    }

    #[test]
    fn parsing_is_deterministic() {
        let a = parse_user_agent(ANDROID_SHELL_CN_UA);
        let b = parse_user_agent(ANDROID_SHELL_CN_UA);
        assert_eq!(a, b);
    }

    #[test]
    fn quick_webview_check_matches_full_parse() {
        assert!(is_own_app_webview(IOS_SHELL_UA));
        assert!(is_own_app_webview(ANDROID_SHELL_CN_UA));
        assert!(!is_own_app_webview(WECHAT_UA));
        assert!(!is_own_app_webview(PLAIN_DESKTOP_UA));
    }

    #[test]
    fn android_device_model_stops_at_build_marker() {
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8 Pro Build/UQ1A.240205.002; wv)";
        let info = parse_user_agent(ua);
        assert_eq!(info.device_model.as_deref(), Some("Pixel 8 Pro"));
        assert_eq!(info.android_version.as_deref(), Some("14"));
    }
}
