//! Path helpers for subpath deployment
//!
//! The page deploys under a subpath in production (`/user/invite`) and at
//! the root during development. Everything that touches `window.location`
//! goes through these helpers so the base path is handled in one place.

use crate::locale::Locale;

fn has_base(base_path: &str) -> bool {
    !base_path.is_empty() && base_path != "/"
}

/// Full path including the base path, for `window.location` operations.
pub fn full_path(base_path: &str, path: &str) -> String {
    if path.is_empty() {
        return base_path.to_string();
    }
    let clean = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    if !has_base(base_path) {
        clean
    } else {
        format!("{base_path}{clean}")
    }
}

/// Full path for a locale root, e.g. `/user/invite/zh-CN`.
pub fn locale_path(base_path: &str, locale: Locale) -> String {
    full_path(base_path, locale.as_str())
}

/// First path segment, which carries the locale on this site.
pub fn extract_locale_segment(pathname: &str) -> Option<&str> {
    pathname.split('/').find(|segment| !segment.is_empty())
}

/// Replace the locale segment of a (base-stripped) pathname.
pub fn replace_locale_in_path(pathname: &str, new_locale: Locale) -> String {
    let mut segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    let tag = new_locale.as_str();
    if segments.is_empty() {
        segments.push(tag);
    } else {
        segments[0] = tag;
    }
    format!("/{}", segments.join("/"))
}

/// Strip the base path from a full pathname, leaving at least `/`.
pub fn strip_base_path<'a>(base_path: &str, pathname: &'a str) -> &'a str {
    if !has_base(base_path) {
        return pathname;
    }
    match pathname.strip_prefix(base_path) {
        Some("") => "/",
        Some(rest) => rest,
        None => pathname,
    }
}

/// Whether a (base-stripped) pathname is exactly a locale root.
pub fn is_locale_root(pathname: &str, locale: Locale) -> bool {
    pathname.trim_end_matches('/') == format!("/{}", locale.as_str())
}

/// Canonical URL for a path, for alternate-language links.
pub fn canonical_url(site_url: &str, base_path: &str, path: &str) -> String {
    let origin = site_url.trim_end_matches('/');
    format!("{origin}{}", full_path(base_path, path))
}
