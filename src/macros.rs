//! Logging macros for the registry's current logger.
//!
//! Each macro captures `file!()` and `line!()`, asks the gating predicate, and
//! only then builds the `format_args!`. Arguments of a filtered call are not
//! evaluated at all.
//!
//! An optional leading `module: <expr>,` supplies the subsystem tag.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::{info, warn, bin_log};
//!
//! // No logger installed yet: goes to the stdout fallback
//! info!("Server started");
//!
//! let port = 8080;
//! info!(module: "http", "Server listening on port {}", port);
//! warn!(module: String::from("pool"), "Retry attempt {} of {}", 3, 5);
//!
//! // Binary records are dropped unless the installed logger enables them
//! bin_log!(module: "wire", b"\xde\xad");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, $module:expr, $($arg:tt)+) => {{
        let logger = $crate::registry::logger();
        if $crate::dispatch::gate(&*logger, $level) {
            $crate::dispatch::emit(
                &*logger,
                $level,
                $crate::CallSite::new(file!(), line!()),
                $module,
                format_args!($($arg)+),
            );
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __module_tag {
    ($m:expr) => {
        ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$m))
    };
}

/// Log a DETAIL-level message.
#[macro_export]
macro_rules! detail {
    (module: $m:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Detail, $crate::__module_tag!($m), $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Detail, ::core::option::Option::None, $($arg)+)
    };
}

/// Log a DEBUG-level message.
///
/// # Examples
///
/// ```
/// use rust_log_facade::debug;
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    (module: $m:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Debug, $crate::__module_tag!($m), $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Debug, ::core::option::Option::None, $($arg)+)
    };
}

/// Log an INFO-level message.
#[macro_export]
macro_rules! info {
    (module: $m:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Info, $crate::__module_tag!($m), $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Info, ::core::option::Option::None, $($arg)+)
    };
}

/// Log a WARN-level message.
#[macro_export]
macro_rules! warn {
    (module: $m:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Warn, $crate::__module_tag!($m), $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Warn, ::core::option::Option::None, $($arg)+)
    };
}

/// Log an ERROR-level message.
///
/// # Examples
///
/// ```
/// use rust_log_facade::error;
/// error!(module: "db", "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    (module: $m:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Error, $crate::__module_tag!($m), $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Error, ::core::option::Option::None, $($arg)+)
    };
}

/// Log a FATAL-level message.
#[macro_export]
macro_rules! fatal {
    (module: $m:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Fatal, $crate::__module_tag!($m), $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Fatal, ::core::option::Option::None, $($arg)+)
    };
}

/// Log a STATE snapshot. Gated by the state toggle, not the level threshold.
#[macro_export]
macro_rules! state {
    (module: $m:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::State, $crate::__module_tag!($m), $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::State, ::core::option::Option::None, $($arg)+)
    };
}

/// Log a TRACE message. Gated by the trace toggle, not the level threshold.
#[macro_export]
macro_rules! trace {
    (module: $m:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Trace, $crate::__module_tag!($m), $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Trace, ::core::option::Option::None, $($arg)+)
    };
}

/// Log a binary record. The payload expression is evaluated only once the
/// installed logger's `enabled_bin()` passes.
#[macro_export]
macro_rules! bin_log {
    (module: $m:expr, $payload:expr $(,)?) => {{
        let logger = $crate::registry::logger();
        if $crate::dispatch::bin_gate(&*logger) {
            $crate::dispatch::bin_emit(
                &*logger,
                $crate::CallSite::new(file!(), line!()),
                $crate::__module_tag!($m),
                ::core::convert::AsRef::<[u8]>::as_ref(&$payload),
            );
        }
    }};
    ($payload:expr $(,)?) => {{
        let logger = $crate::registry::logger();
        if $crate::dispatch::bin_gate(&*logger) {
            $crate::dispatch::bin_emit(
                &*logger,
                $crate::CallSite::new(file!(), line!()),
                ::core::option::Option::None,
                ::core::convert::AsRef::<[u8]>::as_ref(&$payload),
            );
        }
    }};
}
