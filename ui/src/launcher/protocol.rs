//! Fallback detection protocol
//!
//! After navigating to a custom-scheme deep link there is no direct signal
//! for "the app opened". The protocol triangulates from three indirect
//! signals instead:
//!
//! - page visibility going hidden (or `pagehide`) is unambiguous proof of
//!   an app switch and confirms immediately;
//! - a blur followed by a focus return is judged by how long the window
//!   stayed unfocused: past the platform's blur threshold means the OS
//!   really switched away, a quick bounce back means the scheme had no
//!   handler and the fallback timer restarts with the remaining budget;
//! - a top-level timer bounds the worst case and redirects to the store
//!   if nothing was confirmed while the page is still visible.
//!
//! This type is the pure state core: it consumes [`LaunchSignal`]s and
//! emits [`ProtocolAction`]s, and owns the two idempotency flags that make
//! every post-terminal signal a no-op. The browser shell in
//! [`session`](super::session) wires it to real events.

use serde::{Deserialize, Serialize};

/// Floor for the restarted fallback timer after a quick focus bounce.
pub const MIN_REARM_DELAY_MS: u32 = 500;

/// One observed browser event, with timestamps in milliseconds as reported
/// by the environment's clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchSignal {
    VisibilityHidden,
    PageHide,
    Blur { now_ms: f64 },
    Focus { now_ms: f64 },
    /// The fallback timer expired; `page_visible` is the visibility state
    /// sampled at expiry time.
    TimerFired { page_visible: bool },
}

/// What the shell must do in response to a signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProtocolAction {
    None,
    /// Stop the pending fallback timer (a context switch may be underway).
    CancelTimer,
    /// The app opened: tear down and resolve success.
    ConfirmApp,
    /// The app did not open: tear down, navigate to the store, resolve.
    RedirectToStore,
    /// Restart the fallback timer with the remaining timeout budget.
    RearmTimer { delay_ms: u32 },
}

/// State for one in-flight launch attempt. Created when the attempt is
/// armed, discarded the moment it settles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackProtocol {
    timeout_ms: u32,
    blur_threshold_ms: u32,
    app_opened: bool,
    store_redirected: bool,
    blur_at_ms: Option<f64>,
}

impl FallbackProtocol {
    pub fn new(timeout_ms: u32, blur_threshold_ms: u32) -> Self {
        Self {
            timeout_ms,
            blur_threshold_ms,
            app_opened: false,
            store_redirected: false,
            blur_at_ms: None,
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn app_opened(&self) -> bool {
        self.app_opened
    }

    pub fn store_redirected(&self) -> bool {
        self.store_redirected
    }

    /// Whether the attempt reached a terminal state. Once settled, every
    /// further signal is a no-op; this is the guard that prevents duplicate
    /// store redirects and duplicate success callbacks.
    pub fn is_settled(&self) -> bool {
        self.app_opened || self.store_redirected
    }

    /// Advance the state machine by one signal.
    pub fn on_signal(&mut self, signal: LaunchSignal) -> ProtocolAction {
        if self.is_settled() {
            return ProtocolAction::None;
        }

        match signal {
            LaunchSignal::VisibilityHidden | LaunchSignal::PageHide => {
                self.app_opened = true;
                ProtocolAction::ConfirmApp
            }
            LaunchSignal::Blur { now_ms } => {
                self.blur_at_ms = Some(now_ms);
                ProtocolAction::CancelTimer
            }
            LaunchSignal::Focus { now_ms } => match self.blur_at_ms {
                None => ProtocolAction::None,
                Some(blur_at) => {
                    let elapsed = now_ms - blur_at;
                    if elapsed > f64::from(self.blur_threshold_ms) {
                        // Long enough out of focus: the OS switched to the
                        // app and the user came back via multitasking.
                        self.app_opened = true;
                        ProtocolAction::ConfirmApp
                    } else {
                        // Quick bounce back: the scheme had no handler.
                        // Restart the timer, crediting the elapsed time
                        // against the original budget.
                        let remaining =
                            (f64::from(self.timeout_ms) - elapsed).max(f64::from(MIN_REARM_DELAY_MS));
                        ProtocolAction::RearmTimer {
                            delay_ms: remaining as u32,
                        }
                    }
                }
            },
            LaunchSignal::TimerFired { page_visible } => {
                if page_visible {
                    self.store_redirected = true;
                    ProtocolAction::RedirectToStore
                } else {
                    ProtocolAction::None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::platform::{
        blur_threshold_ms, launch_timeout_ms, Platform, ANDROID_LAUNCH_TIMEOUT_MS,
        IOS_LAUNCH_TIMEOUT_MS,
    };

    fn ios_protocol() -> FallbackProtocol {
        FallbackProtocol::new(
            launch_timeout_ms(Platform::Ios),
            blur_threshold_ms(Platform::Ios),
        )
    }

    #[test]
    fn visibility_hidden_confirms_and_settles() {
        let mut protocol = ios_protocol();
        assert_eq!(
            protocol.on_signal(LaunchSignal::VisibilityHidden),
            ProtocolAction::ConfirmApp
        );
        assert!(protocol.app_opened());
        // A timer fire racing in afterwards must be a no-op.
        assert_eq!(
            protocol.on_signal(LaunchSignal::TimerFired { page_visible: true }),
            ProtocolAction::None
        );
        assert!(!protocol.store_redirected());
    }

    #[test]
    fn pagehide_is_equivalent_to_hidden() {
        let mut protocol = ios_protocol();
        assert_eq!(
            protocol.on_signal(LaunchSignal::PageHide),
            ProtocolAction::ConfirmApp
        );
    }

    #[test]
    fn timer_fire_while_visible_redirects_exactly_once() {
        let mut protocol = ios_protocol();
        assert_eq!(
            protocol.on_signal(LaunchSignal::TimerFired { page_visible: true }),
            ProtocolAction::RedirectToStore
        );
        assert!(protocol.store_redirected());
        // Re-triggered timer must not redirect again.
        assert_eq!(
            protocol.on_signal(LaunchSignal::TimerFired { page_visible: true }),
            ProtocolAction::None
        );
        // Nor may a late focus resurrect the attempt.
        assert_eq!(
            protocol.on_signal(LaunchSignal::Focus { now_ms: 9_000.0 }),
            ProtocolAction::None
        );
    }

    #[test]
    fn timer_fire_while_hidden_is_ignored() {
        let mut protocol = ios_protocol();
        assert_eq!(
            protocol.on_signal(LaunchSignal::TimerFired {
                page_visible: false
            }),
            ProtocolAction::None
        );
        assert!(!protocol.is_settled());
    }

    #[test]
    fn blur_records_timestamp_and_cancels_timer() {
        let mut protocol = ios_protocol();
        assert_eq!(
            protocol.on_signal(LaunchSignal::Blur { now_ms: 1_000.0 }),
            ProtocolAction::CancelTimer
        );
        assert!(!protocol.is_settled());
    }

    #[test]
    fn long_blur_confirms_app_on_focus_return() {
        // Blur at t=0, focus at t=2500: exceeds the iOS threshold of 2200.
        let mut protocol = ios_protocol();
        protocol.on_signal(LaunchSignal::Blur { now_ms: 0.0 });
        assert_eq!(
            protocol.on_signal(LaunchSignal::Focus { now_ms: 2_500.0 }),
            ProtocolAction::ConfirmApp
        );
        assert!(protocol.app_opened());
        assert!(!protocol.store_redirected());
    }

    #[test]
    fn quick_bounce_rearms_with_remaining_budget() {
        // Blur at t=0, focus at t=500: below the threshold, so the timer
        // restarts with max(2600 - 500, 500) = 2100ms.
        let mut protocol = ios_protocol();
        protocol.on_signal(LaunchSignal::Blur { now_ms: 0.0 });
        assert_eq!(
            protocol.on_signal(LaunchSignal::Focus { now_ms: 500.0 }),
            ProtocolAction::RearmTimer {
                delay_ms: IOS_LAUNCH_TIMEOUT_MS - 500
            }
        );
        // The re-armed timer firing while visible redirects exactly once.
        assert_eq!(
            protocol.on_signal(LaunchSignal::TimerFired { page_visible: true }),
            ProtocolAction::RedirectToStore
        );
        assert_eq!(
            protocol.on_signal(LaunchSignal::TimerFired { page_visible: true }),
            ProtocolAction::None
        );
    }

    #[test]
    fn rearm_delay_never_drops_below_the_floor() {
        // Android timeout is 1300; a bounce at 1200 leaves only 100ms of
        // budget, which the floor lifts to 500.
        let mut protocol = FallbackProtocol::new(ANDROID_LAUNCH_TIMEOUT_MS, 1_400);
        protocol.on_signal(LaunchSignal::Blur { now_ms: 0.0 });
        assert_eq!(
            protocol.on_signal(LaunchSignal::Focus { now_ms: 1_200.0 }),
            ProtocolAction::RearmTimer {
                delay_ms: MIN_REARM_DELAY_MS
            }
        );
    }

    #[test]
    fn elapsed_exactly_at_threshold_is_a_bounce() {
        // The threshold must be exceeded, not merely met.
        let mut protocol = ios_protocol();
        protocol.on_signal(LaunchSignal::Blur { now_ms: 0.0 });
        // Only 400ms of budget remains, so the floor lifts it to 500.
        assert_eq!(
            protocol.on_signal(LaunchSignal::Focus { now_ms: 2_200.0 }),
            ProtocolAction::RearmTimer {
                delay_ms: MIN_REARM_DELAY_MS
            }
        );
    }

    #[test]
    fn focus_without_prior_blur_is_ignored() {
        let mut protocol = ios_protocol();
        assert_eq!(
            protocol.on_signal(LaunchSignal::Focus { now_ms: 300.0 }),
            ProtocolAction::None
        );
    }

    #[test]
    fn hidden_after_rearm_still_confirms() {
        let mut protocol = ios_protocol();
        protocol.on_signal(LaunchSignal::Blur { now_ms: 0.0 });
        protocol.on_signal(LaunchSignal::Focus { now_ms: 400.0 });
        assert_eq!(
            protocol.on_signal(LaunchSignal::VisibilityHidden),
            ProtocolAction::ConfirmApp
        );
        assert_eq!(
            protocol.on_signal(LaunchSignal::TimerFired { page_visible: true }),
            ProtocolAction::None
        );
    }
}
