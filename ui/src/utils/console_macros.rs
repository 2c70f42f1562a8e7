/// Console logging macros for the WASM build.
///
/// These wrap the gloo_console functions and run `format!` up front so
/// values land in the browser console as plain strings, prefixed with the
/// page clock for correlating launch timing against event timestamps.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {
        gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}
