//! User Interface Components
//!
//! Reusable Dioxus components for the invitation landing page:
//!
//! - **controls**: the launch button and the language selector
//! - **display**: header and invitation-card presentation
//! - **overlay**: the open-in-system-browser guide for disallowed in-app
//!   browsers

pub mod controls;
pub mod display;
pub mod overlay;
