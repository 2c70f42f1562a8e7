use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a launch attempt can surface. The launcher never throws these
/// across its public boundary; they travel inside the resolved
/// [`LaunchResult`](crate::launcher::LaunchResult) and the `on_error`
/// callback. A timeout-driven store fallback is a normal outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LaunchError {
    #[error("deep link is required")]
    DeepLinkRequired,

    #[error("browser window is not available")]
    WindowUnavailable,

    #[error("navigation dispatch failed: {message}")]
    NavigationFailed { message: String },

    #[error("launch session ended before resolving")]
    SessionInterrupted,
}

impl LaunchError {
    /// Configuration errors are the caller's to fix; the rest are
    /// environment failures.
    pub fn is_configuration(&self) -> bool {
        matches!(self, LaunchError::DeepLinkRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            LaunchError::DeepLinkRequired.to_string(),
            "deep link is required"
        );
        assert_eq!(
            LaunchError::NavigationFailed {
                message: "blocked".into()
            }
            .to_string(),
            "navigation dispatch failed: blocked"
        );
    }

    #[test]
    fn only_missing_deep_link_is_configuration() {
        assert!(LaunchError::DeepLinkRequired.is_configuration());
        assert!(!LaunchError::WindowUnavailable.is_configuration());
        assert!(!LaunchError::SessionInterrupted.is_configuration());
    }
}
