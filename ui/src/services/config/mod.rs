//! Application configuration
//!
//! Deployment-specific URLs and paths, overridable at build time through
//! environment variables so the same tree serves staging and production.

use serde::{Deserialize, Serialize};

/// Static configuration for the invite page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deep-link URI that opens the app, before query merging.
    pub deep_link_url: String,

    /// App Store URL for iOS visitors.
    pub ios_store_url: String,

    /// Play Store URL for Android visitors.
    pub android_store_url: String,

    /// Subpath the page is deployed under, `/` for root deployments.
    pub base_path: String,

    /// Canonical site origin.
    pub site_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deep_link_url: option_env!("APP_DEEPLINK_URL")
                .unwrap_or("ideashell://invite")
                .to_string(),
            ios_store_url: option_env!("APP_IOS_STORE_URL")
                .unwrap_or("https://apps.apple.com/app/ideashell/id6473900000")
                .to_string(),
            android_store_url: option_env!("APP_ANDROID_STORE_URL")
                .unwrap_or("https://play.google.com/store/apps/details?id=com.ideashell.app")
                .to_string(),
            base_path: option_env!("APP_BASE_PATH").unwrap_or("/user/invite").to_string(),
            site_url: option_env!("APP_SITE_URL")
                .unwrap_or("https://ideashell.com")
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Whether the deployment lives under a subpath.
    pub fn has_base_path(&self) -> bool {
        !self.base_path.is_empty() && self.base_path != "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert!(!config.deep_link_url.is_empty());
        assert!(config.ios_store_url.starts_with("https://"));
        assert!(config.android_store_url.starts_with("https://"));
        assert!(config.has_base_path());
    }

    #[test]
    fn root_base_path_counts_as_absent() {
        let config = AppConfig {
            base_path: "/".into(),
            ..AppConfig::default()
        };
        assert!(!config.has_base_path());
    }
}
