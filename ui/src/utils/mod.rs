//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM console logging macros used throughout the
//!   crate
//! - **paths**: base-path aware URL path construction for the subpath
//!   deployment
//! - **query**: invitation-code and webview-flag extraction from the
//!   query string

pub mod console_macros;
pub mod navigation;
pub mod paths;
pub mod query;

pub use navigation::*;
pub use paths::*;
pub use query::*;
