//! Deep-link construction
//!
//! Merges caller-supplied query parameters (an invitation code, typically)
//! into the configured deep-link URI. Custom schemes usually parse as
//! standard URLs; when one does not, the builder falls back to plain
//! string concatenation with percent-encoded values.

use url::form_urlencoded;
use url::Url;

/// Build a deep link from a base URI and query parameters. Parameters
/// already present in the base are overwritten, new ones are appended.
/// An empty base yields an empty string.
pub fn build_deep_link(base: &str, params: &[(String, String)]) -> String {
    if base.is_empty() {
        return String::new();
    }
    if params.is_empty() {
        return base.to_string();
    }

    match Url::parse(base) {
        Ok(mut url) => {
            let mut pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            for (key, value) in params {
                match pairs.iter_mut().find(|(k, _)| k == key) {
                    Some(existing) => existing.1 = value.clone(),
                    None => pairs.push((key.clone(), value.clone())),
                }
            }
            url.query_pairs_mut().clear().extend_pairs(&pairs);
            url.to_string()
        }
        Err(_) => concat_fallback(base, params),
    }
}

fn concat_fallback(base: &str, params: &[(String, String)]) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}{separator}{query}")
}

fn percent_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn appends_params_to_custom_scheme() {
        let link = build_deep_link("ideashell://invite", &params(&[("code", "ER56Y")]));
        assert_eq!(link, "ideashell://invite?code=ER56Y");
    }

    #[test]
    fn merges_into_existing_query() {
        let link = build_deep_link(
            "ideashell://invite?src=landing",
            &params(&[("code", "ER56Y")]),
        );
        assert_eq!(link, "ideashell://invite?src=landing&code=ER56Y");
    }

    #[test]
    fn overwrites_existing_key() {
        let link = build_deep_link(
            "ideashell://invite?code=OLD&src=landing",
            &params(&[("code", "NEW")]),
        );
        assert_eq!(link, "ideashell://invite?code=NEW&src=landing");
    }

    #[test]
    fn no_params_returns_base_unchanged() {
        assert_eq!(
            build_deep_link("ideashell://invite", &[]),
            "ideashell://invite"
        );
    }

    #[test]
    fn empty_base_yields_empty_string() {
        assert_eq!(build_deep_link("", &params(&[("code", "X")])), "");
    }

    #[test]
    fn values_are_percent_encoded() {
        let link = build_deep_link(
            "ideashell://invite",
            &params(&[("note", "a b&c"), ("code", "ER56Y")]),
        );
        assert!(link.starts_with("ideashell://invite?"));
        assert!(link.contains("note=a+b%26c") || link.contains("note=a%20b%26c"));
        assert!(link.contains("code=ER56Y"));
    }

    #[test]
    fn unparseable_base_falls_back_to_concatenation() {
        // A scheme-less fragment with spaces is not a URL; the builder must
        // still produce something usable.
        let link = build_deep_link("open app here", &params(&[("code", "E R")]));
        assert_eq!(link, "open app here?code=E+R");
    }

    #[test]
    fn fallback_uses_ampersand_when_query_present() {
        let link = build_deep_link("open app?x=1", &params(&[("code", "Y")]));
        assert_eq!(link, "open app?x=1&code=Y");
    }
}
