//! App Launcher
//!
//! Opens the native ideaShell app from a deep link and decides, using only
//! indirect browser signals, whether to fall back to the app store:
//!
//! - **protocol**: the pure fallback-detection state machine (visibility,
//!   blur/focus timing, timer expiry)
//! - **deep_link**: deep-link URL construction with query parameter merging
//! - **session**: the browser shell that owns one launch attempt — event
//!   listeners, timers, navigation, callbacks
//!
//! The platform never tells the page whether a custom-scheme navigation
//! found a handler; the protocol triangulates it from page visibility,
//! blur/focus timing and a bounded timeout instead.

pub mod deep_link;
pub mod protocol;
#[cfg(feature = "web")]
pub mod session;

pub use deep_link::build_deep_link;
pub use protocol::{FallbackProtocol, LaunchSignal, ProtocolAction};
#[cfg(feature = "web")]
pub use session::{
    launch_app, launch_with_fallback, open_store, LaunchConfig, LaunchMethod, LaunchResult,
};
