//! Full-page navigation helpers
//!
//! Locale redirects replace the current history entry so the back button
//! never bounces the visitor through a variant URL.

#[cfg(feature = "web")]
pub fn replace_location(target: &str) {
    use crate::console_warn;

    if let Some(window) = web_sys::window() {
        if let Err(error) = window.location().replace(target) {
            console_warn!("redirect failed: {:?}", error);
        }
    }
}
