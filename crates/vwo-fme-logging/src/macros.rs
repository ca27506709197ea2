//! ---
//! fme_section: "02-logging"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Structured logging adapters and sinks."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---

#[doc(hidden)]
#[macro_export]
macro_rules! __fme_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        tracing::event!(
            $level,
            sdk = ctx.sdk.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            platform = ctx.platform.unwrap_or(""),
            component = ctx.component.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with SDK context.
#[macro_export]
macro_rules! fme_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fme_event!(tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fme_event!(tracing::Level::INFO, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a debug log enriched with SDK context.
#[macro_export]
macro_rules! fme_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fme_event!(tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fme_event!(tracing::Level::DEBUG, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit an error log enriched with SDK context.
#[macro_export]
macro_rules! fme_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fme_event!(tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fme_event!(tracing::Level::ERROR, $crate::LogContext::default(), $($arg)+)
    };
}
