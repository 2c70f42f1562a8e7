//! Locale detection from user-agent and navigator signals
//!
//! Resolution order: a `Language/` hint embedded in the ideaShell
//! user-agent wins over the browser's own preference list; within the
//! browser list, entries are tried in reported order and the first
//! supported match wins; otherwise English.

use serde::{Deserialize, Serialize};

use super::{Locale, DEFAULT_LOCALE};
use crate::detection::UaInfo;

/// Where the resolved locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocaleSource {
    UserAgent,
    Navigator,
    Default,
}

/// Outcome of one locale resolution. `locale` is always a member of the
/// supported set, never the raw tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleDetection {
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    pub source: LocaleSource,
    pub is_own_app: bool,
}

/// Normalize a language tag for table lookup: hyphens become underscores
/// and the script+region combinations collapse to their short forms.
fn normalize_language_tag(tag: &str) -> String {
    let normalized = tag.trim().replace('-', "_");
    match normalized.as_str() {
        "zh_Hans_CN" => "zh_CN".to_string(),
        "zh_Hant_TW" => "zh_TW".to_string(),
        "zh_Hant_HK" => "zh_HK".to_string(),
        _ => normalized,
    }
}

/// Exact-match table over every regional variant the product groups under
/// a single supported locale.
fn exact_match(normalized: &str) -> Option<Locale> {
    let locale = match normalized {
        // Chinese
        "zh_CN" | "zh" | "zh_Hans" | "zh_SG" => Locale::ZhCn,
        "zh_TW" | "zh_HK" | "zh_MO" | "zh_Hant" => Locale::ZhTw,

        // Japanese
        "ja" | "ja_JP" => Locale::Ja,

        // Spanish: every regional variant maps to the single es locale
        "es" | "es_ES" | "es_MX" | "es_AR" | "es_CO" | "es_CL" | "es_PE" | "es_VE" | "es_EC"
        | "es_GT" | "es_CU" | "es_BO" | "es_DO" | "es_HN" | "es_PY" | "es_SV" | "es_NI"
        | "es_CR" | "es_PA" | "es_UY" | "es_PR" => Locale::Es,

        // Portuguese, Portugal included
        "pt" | "pt_BR" | "pt_PT" => Locale::PtBr,

        // French
        "fr" | "fr_FR" | "fr_BE" | "fr_CA" | "fr_CH" | "fr_LU" | "fr_MC" => Locale::Fr,

        // German
        "de" | "de_DE" | "de_AT" | "de_CH" | "de_LU" | "de_LI" => Locale::De,

        // English
        "en" | "en_US" | "en_GB" | "en_CA" | "en_AU" | "en_NZ" | "en_IE" | "en_ZA" | "en_IN"
        | "en_SG" | "en_HK" => Locale::En,

        _ => return None,
    };
    Some(locale)
}

/// Map a single language tag to a supported locale, or `None` when the tag
/// carries no usable signal.
pub fn map_language_tag(tag: &str) -> Option<Locale> {
    let normalized = normalize_language_tag(tag);

    if let Some(locale) = exact_match(&normalized) {
        return Some(locale);
    }

    // Primary language subtag alone
    let primary = normalized.split('_').next().unwrap_or("");
    if let Some(locale) = exact_match(primary) {
        return Some(locale);
    }

    // Chinese without a table entry: infer script from region hints,
    // defaulting to simplified.
    if primary == "zh" {
        let traditional = normalized.contains("TW")
            || normalized.contains("HK")
            || normalized.contains("MO")
            || normalized.contains("Hant");
        return Some(if traditional { Locale::ZhTw } else { Locale::ZhCn });
    }

    None
}

/// Resolve the preferred locale from a parsed user-agent and the browser's
/// preference list, in that order. Pure; the navigator-reading wrapper
/// lives below.
pub fn resolve_locale(ua: &UaInfo, browser_languages: &[String]) -> LocaleDetection {
    if let Some(language) = ua.language.as_deref() {
        if let Some(locale) = map_language_tag(language) {
            return LocaleDetection {
                locale,
                original_language: Some(language.to_string()),
                source: LocaleSource::UserAgent,
                is_own_app: ua.is_own_app,
            };
        }
    }

    for tag in browser_languages {
        if tag.is_empty() {
            continue;
        }
        if let Some(locale) = map_language_tag(tag) {
            return LocaleDetection {
                locale,
                original_language: Some(tag.clone()),
                source: LocaleSource::Navigator,
                is_own_app: ua.is_own_app,
            };
        }
    }

    LocaleDetection {
        locale: DEFAULT_LOCALE,
        original_language: None,
        source: LocaleSource::Default,
        is_own_app: ua.is_own_app,
    }
}

/// Read the navigator's user-agent and language list and resolve from them.
#[cfg(feature = "web")]
pub fn detect_locale() -> LocaleDetection {
    use crate::detection::parse_user_agent;

    let window = web_sys::window();
    let ua_string = window
        .as_ref()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();
    let languages: Vec<String> = window
        .map(|w| {
            let navigator = w.navigator();
            let listed: Vec<String> = navigator
                .languages()
                .iter()
                .filter_map(|v| v.as_string())
                .collect();
            if listed.is_empty() {
                navigator.language().into_iter().collect()
            } else {
                listed
            }
        })
        .unwrap_or_default();

    resolve_locale(&parse_user_agent(&ua_string), &languages)
}
