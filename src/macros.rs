//! Logging macros for ergonomic log message formatting.
//!
//! These macros wrap the formatted entry points of [`Logger`](crate::Logger)
//! with `format_args!`, so arguments are only formatted when the logger's
//! level lets the message through.
//!
//! # Examples
//!
//! ```
//! use hierlog::prelude::*;
//! use hierlog::info;
//!
//! let logger = Logger::builder().writer(std::io::sink(), OutputFormat::Text).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at a runtime-chosen level.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let logger = Logger::builder().writer(std::io::sink(), OutputFormat::Text).build();
/// use hierlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            let _ = logger.log(level, format!($($arg)+));
        }
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use hierlog::prelude::*;
/// # let logger = Logger::builder().writer(std::io::sink(), OutputFormat::Text).build();
/// use hierlog::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then raise [`FatalSignal`](crate::FatalSignal).
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}
