//! Query-string helpers
//!
//! The invite page reacts to two query parameters: the invitation code
//! (accepted under two aliases) and a `webview` flag the host app sets
//! when it embeds the page and already provides its own chrome.

use url::form_urlencoded;

/// Invitation code aliases, checked in order.
pub const INVITE_CODE_PARAMS: [&str; 2] = ["code", "inviteCode"];

/// Parse a `location.search` string (with or without the leading `?`)
/// into decoded key/value pairs.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    let trimmed = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(trimmed.as_bytes())
        .into_owned()
        .collect()
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Extract the invitation code, preferring `code` over `inviteCode`.
/// Empty values count as absent.
pub fn invitation_code(search: &str) -> Option<String> {
    let pairs = parse_query(search);
    INVITE_CODE_PARAMS
        .iter()
        .find_map(|key| first_value(&pairs, key))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Whether the host app requested webview presentation (`webview=true`).
pub fn is_webview_request(search: &str) -> bool {
    let pairs = parse_query(search);
    first_value(&pairs, "webview") == Some("true")
}

/// The current `location.search`, empty when unavailable.
#[cfg(feature = "web")]
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_alias_order() {
        assert_eq!(invitation_code("?code=ER56Y").as_deref(), Some("ER56Y"));
        assert_eq!(
            invitation_code("?inviteCode=AB12C").as_deref(),
            Some("AB12C")
        );
        // `code` wins when both are present.
        assert_eq!(
            invitation_code("?inviteCode=LOSER&code=WINNER").as_deref(),
            Some("WINNER")
        );
    }

    #[test]
    fn missing_or_empty_code_is_none() {
        assert_eq!(invitation_code(""), None);
        assert_eq!(invitation_code("?webview=true"), None);
        assert_eq!(invitation_code("?code="), None);
    }

    #[test]
    fn codes_are_percent_decoded() {
        assert_eq!(invitation_code("?code=A%2B1").as_deref(), Some("A+1"));
    }

    #[test]
    fn webview_flag_is_strict() {
        assert!(is_webview_request("?webview=true"));
        assert!(is_webview_request("webview=true&code=X"));
        assert!(!is_webview_request("?webview=1"));
        assert!(!is_webview_request("?webview=TRUE"));
        assert!(!is_webview_request(""));
    }
}
