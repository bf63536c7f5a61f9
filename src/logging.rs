//! Logging abstraction layer.
//!
//! Every record emitted by the tracker goes through the macros below, which
//! forward to either the [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing) crate depending on the enabled feature.
//! With neither feature enabled the macros expand to nothing and the
//! arguments are not evaluated.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! All records carry the [`TARGET`] target so hosts can filter tracker output
//! with e.g. `RUST_LOG=navigation_tracker=debug`.
//!
//! ```ignore
//! use navigation_tracker::{debug_log, warn_log};
//!
//! debug_log!("Recorded {} entry '{}'", kind, title);
//! warn_log!("Modal '{}' reopened while still open", modal_id);
//! ```

/// Log target shared by every record the crate emits.
pub const TARGET: &str = "navigation_tracker";

/// Internal dispatcher: `__nav_log!(level_ident, format args...)`.
#[doc(hidden)]
#[macro_export]
macro_rules! __nav_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!(target: $crate::logging::TARGET, $($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!(target: $crate::logging::TARGET, $($arg)*);
    };
}

/// Emit a **trace**-level record (reducer transitions, cache lookups).
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__nav_log!(trace, $($arg)*) };
}

/// Emit a **debug**-level record (appends, evictions, router syncs).
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__nav_log!(debug, $($arg)*) };
}

/// Emit an **info**-level record (construction, history clears).
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => { $crate::__nav_log!(info, $($arg)*) };
}

/// Emit a **warn**-level record.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__nav_log!(warn, $($arg)*) };
}

/// Emit an **error**-level record.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => { $crate::__nav_log!(error, $($arg)*) };
}
