pub mod browser_guide;

pub use browser_guide::BrowserGuideOverlay;
