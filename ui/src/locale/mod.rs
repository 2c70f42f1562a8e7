//! Locale Support
//!
//! The page ships in a fixed, closed set of eight locales. Everything that
//! resolves a language signal must land inside this set:
//!
//! - **detector**: maps a language tag (UA hint or navigator preference) to
//!   a supported locale with deterministic fallback
//! - **variants**: maps known-but-unsupported locale tags appearing in URL
//!   paths to their canonical supported locale for redirects
//! - **strings**: the localized UI strings the carried components need

pub mod detector;
pub mod strings;
pub mod variants;

#[cfg(feature = "web")]
pub use detector::detect_locale;
pub use detector::{resolve_locale, LocaleDetection, LocaleSource};
pub use strings::ui_strings;
pub use variants::canonical_for_path_variant;

use serde::{Deserialize, Serialize};

/// A supported locale. Anything outside this set resolves to one of these
/// via the detector or the variant table, never passes through unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "de")]
    De,
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 8] = [
        Locale::En,
        Locale::ZhCn,
        Locale::ZhTw,
        Locale::Ja,
        Locale::Es,
        Locale::PtBr,
        Locale::Fr,
        Locale::De,
    ];

    /// The canonical tag used in URL paths and HTML lang attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
            Locale::Ja => "ja",
            Locale::Es => "es",
            Locale::PtBr => "pt-BR",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    /// Native-script display name for the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCn => "简体中文",
            Locale::ZhTw => "繁體中文",
            Locale::Ja => "日本語",
            Locale::Es => "Español",
            Locale::PtBr => "Português (Brasil)",
            Locale::Fr => "Français",
            Locale::De => "Deutsch",
        }
    }

    /// Exact match against the supported tags only. Variant and fuzzy
    /// resolution live in [`detector`] and [`variants`].
    pub fn from_tag(tag: &str) -> Option<Locale> {
        match tag {
            "en" => Some(Locale::En),
            "zh-CN" => Some(Locale::ZhCn),
            "zh-TW" => Some(Locale::ZhTw),
            "ja" => Some(Locale::Ja),
            "es" => Some(Locale::Es),
            "pt-BR" => Some(Locale::PtBr),
            "fr" => Some(Locale::Fr),
            "de" => Some(Locale::De),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.as_str()), Some(locale));
        }
    }

    #[test]
    fn unsupported_tags_do_not_parse() {
        for tag in ["zh", "en-US", "pt", "ko", ""] {
            assert_eq!(Locale::from_tag(tag), None);
        }
    }

    #[test]
    fn every_locale_has_a_label() {
        for locale in Locale::ALL {
            assert!(!locale.label().is_empty());
        }
    }
}
