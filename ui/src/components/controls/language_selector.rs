use dioxus::prelude::*;

use crate::locale::Locale;

/// LocalStorage key for the visitor's explicit language choice. An
/// explicit choice outranks automatic detection on the next visit.
pub const LOCALE_STORAGE_KEY: &str = "ideashell.locale";

#[component]
pub fn LanguageSelector(current: Locale) -> Element {
    rsx! {
        div {
            class: "language-selector",
            select {
                "aria-label": "Language",
                onchange: move |event| switch_locale(event.value()),
                for locale in Locale::ALL {
                    option {
                        value: "{locale}",
                        selected: locale == current,
                        {locale.label()}
                    }
                }
            }
        }
    }
}

/// Locale the visitor picked on a previous visit, if any.
#[cfg(feature = "web")]
pub fn stored_locale() -> Option<Locale> {
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::get::<String>(LOCALE_STORAGE_KEY)
        .ok()
        .and_then(|tag| Locale::from_tag(&tag))
}

#[cfg(feature = "web")]
fn switch_locale(tag: String) {
    use gloo_storage::{LocalStorage, Storage};

    use crate::console_warn;
    use crate::services::config::AppConfig;
    use crate::utils::paths::{full_path, replace_locale_in_path, strip_base_path};

    let Some(locale) = Locale::from_tag(&tag) else {
        return;
    };
    if let Err(error) = LocalStorage::set(LOCALE_STORAGE_KEY, locale.as_str()) {
        console_warn!("failed to persist locale choice: {:?}", error);
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();

    let config = AppConfig::default();
    let stripped = strip_base_path(&config.base_path, &pathname).to_string();
    let replaced = replace_locale_in_path(&stripped, locale);
    let target = format!("{}{search}", full_path(&config.base_path, &replaced));

    if let Err(error) = location.set_href(&target) {
        console_warn!("locale switch navigation failed: {:?}", error);
    }
}

#[cfg(not(feature = "web"))]
fn switch_locale(_tag: String) {}
