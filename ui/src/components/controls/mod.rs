pub mod download_button;
pub mod language_selector;
pub mod store_badges;

pub use download_button::DownloadButton;
#[cfg(feature = "web")]
pub use language_selector::stored_locale;
pub use language_selector::LanguageSelector;
pub use store_badges::StoreBadges;
