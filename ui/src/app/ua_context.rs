//! Parse-once user-agent snapshot for the component tree
//!
//! The user-agent is parsed exactly once per page load and shared through
//! Dioxus context; components read the immutable snapshot instead of
//! re-running the parser.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::detection::{classify_platform, parse_user_agent, PlatformInfo, UaInfo};

#[derive(Clone)]
pub struct UserAgentContext {
    pub ua: Rc<UaInfo>,
    pub platform: PlatformInfo,
}

impl UserAgentContext {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            ua: Rc::new(parse_user_agent(raw)),
            platform: classify_platform(raw),
        }
    }

    /// Snapshot of the navigator's user-agent.
    #[cfg(feature = "web")]
    pub fn from_navigator() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        Self::from_raw(&raw)
    }

    pub fn is_own_app(&self) -> bool {
        self.ua.is_own_app
    }

    pub fn is_wechat(&self) -> bool {
        self.ua.is_wechat
    }
}

/// Read the snapshot provided by [`InvitePage`](super::InvitePage).
pub fn use_user_agent() -> UserAgentContext {
    use_context::<UserAgentContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::Platform;

    #[test]
    fn context_projects_both_views_of_one_string() {
        let context = UserAgentContext::from_raw(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) ideaShell/2.5.8(258)",
        );
        assert!(context.is_own_app());
        assert!(!context.is_wechat());
        assert_eq!(context.ua.platform, Platform::Ios);
        assert_eq!(context.platform.platform, Platform::Ios);
        assert!(context.platform.is_mobile);
    }
}
