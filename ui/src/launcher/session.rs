//! Launch session: one attempt to open the app with store fallback
//!
//! [`launch_with_fallback`] owns the whole flow for a single user-initiated
//! click: build the deep link, arm the detection listeners and the fallback
//! timer, navigate, and resolve a [`LaunchResult`] exactly once through a
//! oneshot channel. Each invocation allocates an independent session;
//! concurrent launches are not serialized here, so callers wanting
//! at-most-one-in-flight semantics disable the triggering control while a
//! launch is pending.
//!
//! Timer and listener handles are only dropped from the awaiting task after
//! the result has been delivered, never from inside one of their own
//! callbacks; in between, the protocol's settled flags make every late
//! event a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use tracing::instrument;
use web_sys::VisibilityState;

use crate::detection::platform::{blur_threshold_ms, detect_platform, launch_timeout_ms, store_url};
use crate::services::config::AppConfig;
use crate::services::errors::LaunchError;
use crate::{console_debug, console_info, console_warn};

use super::deep_link::build_deep_link;
use super::protocol::{FallbackProtocol, LaunchSignal, ProtocolAction};

/// Fire-and-forget side-effect hook, invoked at most once per launch.
pub type LaunchCallback = Rc<dyn Fn()>;
/// Error hook, invoked with the failure at most once per launch.
pub type LaunchErrorCallback = Rc<dyn Fn(&LaunchError)>;

/// Caller-supplied parameters for one launch attempt. Immutable for the
/// duration of the attempt.
#[derive(Default, Clone)]
pub struct LaunchConfig {
    /// Deep-link URI to open the app. Required; without it the attempt
    /// resolves as a configuration error.
    pub deep_link: Option<String>,

    /// Extra query parameters merged into the deep link.
    pub deep_link_params: Vec<(String, String)>,

    /// Override for the platform fallback timeout.
    pub custom_timeout_ms: Option<u32>,

    /// Override for the platform store URL.
    pub custom_store_url: Option<String>,

    pub on_success: Option<LaunchCallback>,
    pub on_fallback: Option<LaunchCallback>,
    pub on_error: Option<LaunchErrorCallback>,
}

/// How the attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMethod {
    App,
    Store,
    None,
}

/// Outcome of one launch attempt. Produced exactly once per invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchResult {
    pub success: bool,
    pub method: LaunchMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<LaunchError>,
}

impl LaunchResult {
    fn app() -> Self {
        Self {
            success: true,
            method: LaunchMethod::App,
            error: None,
        }
    }

    fn store() -> Self {
        Self {
            success: true,
            method: LaunchMethod::Store,
            error: None,
        }
    }

    fn failed(error: LaunchError) -> Self {
        Self {
            success: false,
            method: LaunchMethod::None,
            error: Some(error),
        }
    }
}

/// Ephemeral state for one in-flight attempt. Dropped as soon as the
/// awaiting task has received the result and torn the session down.
struct LaunchSession {
    protocol: RefCell<FallbackProtocol>,
    resolver: RefCell<Option<oneshot::Sender<LaunchResult>>>,
    timer: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
    store_url: String,
    on_success: Option<LaunchCallback>,
    on_fallback: Option<LaunchCallback>,
    on_error: Option<LaunchErrorCallback>,
}

/// Issue a navigation to the given target.
fn navigate(href: &str) -> Result<(), LaunchError> {
    let window = web_sys::window().ok_or(LaunchError::WindowUnavailable)?;
    window
        .location()
        .set_href(href)
        .map_err(|err| LaunchError::NavigationFailed {
            message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        })
}

/// Navigate to the deep link directly, without fallback detection.
pub fn launch_app(deep_link: &str) -> Result<(), LaunchError> {
    if deep_link.is_empty() {
        return Err(LaunchError::DeepLinkRequired);
    }
    navigate(deep_link)
}

/// Open the app store for the current platform (or a caller override),
/// bypassing launch detection entirely. A platform without a store URL is
/// a logged no-op, not an error.
pub fn open_store(config: &AppConfig, custom_store_url: Option<&str>) -> Result<(), LaunchError> {
    let platform_info = detect_platform();
    let target = custom_store_url
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| store_url(platform_info.platform, config));

    match target {
        Some(url) => navigate(&url),
        None => {
            console_warn!(
                "no store URL available for platform: {}",
                platform_info.platform.name()
            );
            Ok(())
        }
    }
}

/// Attempt to open the app via deep link, falling back to the store when
/// no app-open confirmation arrives in time. Never panics or throws across
/// this boundary; every outcome is delivered through the returned
/// [`LaunchResult`] and the optional callbacks.
#[instrument(skip(app_config, config))]
pub async fn launch_with_fallback(app_config: &AppConfig, config: LaunchConfig) -> LaunchResult {
    let platform_info = detect_platform();
    let resolved_store = config
        .custom_store_url
        .clone()
        .filter(|url| !url.is_empty())
        .or_else(|| store_url(platform_info.platform, app_config));

    let Some(base) = config.deep_link.clone().filter(|link| !link.is_empty()) else {
        let error = LaunchError::DeepLinkRequired;
        if let Some(on_error) = &config.on_error {
            on_error(&error);
        }
        return LaunchResult::failed(error);
    };
    let target = build_deep_link(&base, &config.deep_link_params);

    // No store to fall back to (desktop, unknown platform): navigate and
    // resolve immediately, no timers or listeners armed.
    let Some(store) = resolved_store else {
        return match navigate(&target) {
            Ok(()) => {
                if let Some(on_success) = &config.on_success {
                    on_success();
                }
                LaunchResult::app()
            }
            Err(error) => {
                tracing::error!("deep link navigation failed: {error}");
                if let Some(on_error) = &config.on_error {
                    on_error(&error);
                }
                LaunchResult::failed(error)
            }
        };
    };

    let timeout_ms = config
        .custom_timeout_ms
        .unwrap_or_else(|| launch_timeout_ms(platform_info.platform));
    let threshold_ms = blur_threshold_ms(platform_info.platform);

    console_debug!(
        "launch armed: platform={} timeout={}ms blur_threshold={}ms",
        platform_info.platform.name(),
        timeout_ms,
        threshold_ms
    );

    let (sender, receiver) = oneshot::channel();
    let session = Rc::new(LaunchSession {
        protocol: RefCell::new(FallbackProtocol::new(timeout_ms, threshold_ms)),
        resolver: RefCell::new(Some(sender)),
        timer: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
        store_url: store,
        on_success: config.on_success.clone(),
        on_fallback: config.on_fallback.clone(),
        on_error: config.on_error.clone(),
    });

    // Detection is armed before the navigation is issued, so an early
    // visibility change cannot slip through unobserved.
    arm_listeners(&session);
    arm_fallback_timer(&session, timeout_ms);

    if let Err(error) = navigate(&target) {
        tracing::error!("deep link navigation failed: {error}");
        if let Some(on_error) = &session.on_error {
            on_error(&error);
        }
        resolve(&session, LaunchResult::failed(error));
    }

    let result = match receiver.await {
        Ok(result) => result,
        Err(_) => LaunchResult::failed(LaunchError::SessionInterrupted),
    };

    // Teardown happens here, on the awaiting task: handles are never
    // dropped from inside their own callbacks.
    teardown(&session);
    result
}

fn page_visibility() -> VisibilityState {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.visibility_state())
        .unwrap_or(VisibilityState::Visible)
}

fn dispatch(session: &Rc<LaunchSession>, signal: LaunchSignal) {
    let action = session.protocol.borrow_mut().on_signal(signal);
    apply_action(session, action);
}

fn apply_action(session: &Rc<LaunchSession>, action: ProtocolAction) {
    match action {
        ProtocolAction::None => {}
        ProtocolAction::CancelTimer => {
            session.timer.borrow_mut().take();
        }
        ProtocolAction::ConfirmApp => {
            console_info!("app open confirmed");
            if let Some(on_success) = &session.on_success {
                on_success();
            }
            resolve(session, LaunchResult::app());
        }
        ProtocolAction::RedirectToStore => match navigate(&session.store_url) {
            Ok(()) => {
                console_info!("no app-open confirmation, redirected to store");
                if let Some(on_fallback) = &session.on_fallback {
                    on_fallback();
                }
                resolve(session, LaunchResult::store());
            }
            Err(error) => {
                tracing::error!("store navigation failed: {error}");
                if let Some(on_error) = &session.on_error {
                    on_error(&error);
                }
                resolve(session, LaunchResult::failed(error));
            }
        },
        ProtocolAction::RearmTimer { delay_ms } => {
            console_debug!("quick focus bounce, restarting fallback timer: {}ms", delay_ms);
            arm_fallback_timer(session, delay_ms);
        }
    }
}

fn resolve(session: &LaunchSession, result: LaunchResult) {
    if let Some(sender) = session.resolver.borrow_mut().take() {
        let _ = sender.send(result);
    }
}

fn teardown(session: &LaunchSession) {
    session.timer.borrow_mut().take();
    session.listeners.borrow_mut().clear();
}

fn arm_listeners(session: &Rc<LaunchSession>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let mut listeners = session.listeners.borrow_mut();

    let visibility_session = Rc::clone(session);
    listeners.push(EventListener::new(
        &document,
        "visibilitychange",
        move |_| {
            if page_visibility() == VisibilityState::Hidden {
                dispatch(&visibility_session, LaunchSignal::VisibilityHidden);
            }
        },
    ));

    let pagehide_session = Rc::clone(session);
    listeners.push(EventListener::new(&window, "pagehide", move |_| {
        dispatch(&pagehide_session, LaunchSignal::PageHide);
    }));

    let blur_session = Rc::clone(session);
    listeners.push(EventListener::new(&window, "blur", move |_| {
        dispatch(
            &blur_session,
            LaunchSignal::Blur {
                now_ms: js_sys::Date::now(),
            },
        );
    }));

    let focus_session = Rc::clone(session);
    listeners.push(EventListener::new(&window, "focus", move |_| {
        dispatch(
            &focus_session,
            LaunchSignal::Focus {
                now_ms: js_sys::Date::now(),
            },
        );
    }));
}

fn arm_fallback_timer(session: &Rc<LaunchSession>, delay_ms: u32) {
    let timer_session = Rc::clone(session);
    let timeout = Timeout::new(delay_ms, move || {
        // This callback cannot drop its own handle; empty the slot without
        // running the cancel path. The timer already fired.
        if let Some(fired) = timer_session.timer.borrow_mut().take() {
            fired.forget();
        }
        dispatch(
            &timer_session,
            LaunchSignal::TimerFired {
                page_visible: page_visibility() == VisibilityState::Visible,
            },
        );
    });
    *session.timer.borrow_mut() = Some(timeout);
}
