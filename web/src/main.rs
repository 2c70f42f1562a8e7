use dioxus::prelude::*;

use ui::components::controls::stored_locale;
use ui::locale::{canonical_for_path_variant, detect_locale, ui_strings, Locale, DEFAULT_LOCALE};
use ui::services::config::AppConfig;
use ui::utils::{current_search, locale_path, replace_location};
use ui::InvitePage;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Root {},
    #[route("/:locale")]
    LocaleRoot { locale: String },
}

/// Full-page redirect to a locale root, preserving the query string so the
/// invitation code survives the hop.
fn redirect_to_locale(locale: Locale) {
    let config = AppConfig::default();
    let target = format!(
        "{}{}",
        locale_path(&config.base_path, locale),
        current_search()
    );
    replace_location(&target);
}

/// `/` carries no locale: an explicit earlier choice wins, then automatic
/// detection (UA hint, then navigator languages, then English).
#[component]
fn Root() -> Element {
    use_effect(|| {
        let locale = stored_locale().unwrap_or_else(|| detect_locale().locale);
        redirect_to_locale(locale);
    });

    rsx! {
        RedirectScreen {}
    }
}

/// `/{locale}` renders the page for supported tags; known variants
/// redirect to their canonical locale, anything else to the detected one.
#[component]
fn LocaleRoot(locale: String) -> Element {
    let supported = Locale::from_tag(&locale);

    let segment = locale.clone();
    use_effect(move || {
        if supported.is_none() {
            let target =
                canonical_for_path_variant(&segment).unwrap_or_else(|| detect_locale().locale);
            redirect_to_locale(target);
        }
    });

    match supported {
        Some(resolved) => rsx! {
            InvitePage { locale: resolved }
        },
        None => rsx! {
            RedirectScreen {}
        },
    }
}

#[component]
fn RedirectScreen() -> Element {
    let strings = ui_strings(DEFAULT_LOCALE);
    rsx! {
        div {
            class: "redirect-screen",
            div { class: "redirect-spinner" }
            p { class: "redirect-note", "{strings.redirecting}" }
        }
    }
}
