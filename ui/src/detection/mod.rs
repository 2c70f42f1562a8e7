//! Environment Detection
//!
//! This module classifies the runtime environment from the user-agent string:
//!
//! - **platform**: iOS/Android/desktop classification and the launch timing
//!   constants that depend on it
//! - **ua_parser**: structured facts from the raw user-agent (embedded
//!   ideaShell webview, disallowed in-app browsers, app version, device,
//!   network and language hints)
//!
//! Everything here is a pure function over the raw UA string; parsing a
//! given string always produces the same result.

pub mod platform;
pub mod ua_parser;

pub use platform::*;
pub use ua_parser::*;
