//! Locale path variants
//!
//! Visitors arrive with all kinds of locale tags in the URL path: bare
//! `zh`, script forms like `zh-Hant`, regionals like `en-GB`, even ISO
//! 639-2 codes. Each known variant redirects to its canonical supported
//! locale. This table is consulted only when resolving an incoming URL
//! path, never for a user's language preference.

use super::Locale;

/// Canonical locale for a known path variant, or `None` for tags we have
/// never seen in the wild.
pub fn canonical_for_path_variant(segment: &str) -> Option<Locale> {
    let locale = match segment {
        // Chinese
        "zh" | "zh-Hans" | "zh-Hans-CN" | "zh-SG" => Locale::ZhCn,
        "zh-Hant" | "zh-Hant-TW" | "zh-Hant-HK" | "zh-HK" | "zh-MO" => Locale::ZhTw,
        // ISO 639-2/T and /B
        "chi" | "zho" => Locale::ZhCn,

        // Japanese
        "ja-JP" | "jpn" => Locale::Ja,

        // English
        "en-US" | "en-GB" | "en-CA" | "en-AU" | "en-NZ" | "en-IN" | "en-SG" | "eng" => Locale::En,

        // Spanish
        "es-ES" | "es-MX" | "es-AR" | "es-CO" | "es-CL" | "es-PE" | "spa" => Locale::Es,

        // Portuguese
        "pt" | "pt-PT" | "por" => Locale::PtBr,

        // French
        "fr-FR" | "fr-CA" | "fr-BE" | "fr-CH" | "fra" | "fre" => Locale::Fr,

        // German
        "de-DE" | "de-AT" | "de-CH" | "ger" | "deu" => Locale::De,

        _ => return None,
    };
    Some(locale)
}

/// Whether a path segment is a variant that needs redirection.
pub fn is_path_variant(segment: &str) -> bool {
    canonical_for_path_variant(segment).is_some()
}

/// All variant segments, for static path generation.
pub fn all_path_variants() -> &'static [&'static str] {
    &[
        "zh", "zh-Hans", "zh-Hans-CN", "zh-SG", "zh-Hant", "zh-Hant-TW", "zh-Hant-HK", "zh-HK",
        "zh-MO", "chi", "zho", "ja-JP", "jpn", "en-US", "en-GB", "en-CA", "en-AU", "en-NZ",
        "en-IN", "en-SG", "eng", "es-ES", "es-MX", "es-AR", "es-CO", "es-CL", "es-PE", "spa",
        "pt", "pt-PT", "por", "fr-FR", "fr-CA", "fr-BE", "fr-CH", "fra", "fre", "de-DE", "de-AT",
        "de-CH", "ger", "deu",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_resolves_into_the_supported_set() {
        for segment in all_path_variants() {
            let canonical = canonical_for_path_variant(segment)
                .unwrap_or_else(|| panic!("variant {segment} missing from table"));
            assert!(Locale::ALL.contains(&canonical));
        }
    }

    #[test]
    fn supported_tags_are_not_variants() {
        for locale in Locale::ALL {
            assert!(!is_path_variant(locale.as_str()));
        }
    }

    #[test]
    fn iso_639_2_codes_resolve() {
        assert_eq!(canonical_for_path_variant("zho"), Some(Locale::ZhCn));
        assert_eq!(canonical_for_path_variant("jpn"), Some(Locale::Ja));
        assert_eq!(canonical_for_path_variant("fre"), Some(Locale::Fr));
        assert_eq!(canonical_for_path_variant("deu"), Some(Locale::De));
    }

    #[test]
    fn unknown_segments_are_not_redirected() {
        for segment in ["ko", "about", "", "zh_CN", "EN-us"] {
            assert_eq!(canonical_for_path_variant(segment), None);
        }
    }

    #[test]
    fn hong_kong_and_macau_map_to_traditional() {
        assert_eq!(canonical_for_path_variant("zh-HK"), Some(Locale::ZhTw));
        assert_eq!(canonical_for_path_variant("zh-MO"), Some(Locale::ZhTw));
        assert_eq!(canonical_for_path_variant("zh-SG"), Some(Locale::ZhCn));
    }
}
