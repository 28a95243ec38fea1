//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Like the logger
//! methods they expand to, they return `Result<Option<String>>`.
//!
//! # Examples
//!
//! ```
//! use rust_template_logger::prelude::*;
//! use rust_template_logger::info;
//!
//! let logger = Logger::builder()
//!     .template("%L %C")
//!     .output(OutputSpec::single(Destination::Discard))
//!     .build()
//!     .unwrap();
//!
//! let port = 8080;
//! let line = info!(logger, "Server listening on port {}", port).unwrap();
//! assert_eq!(line.as_deref(), Some("2 Server listening on port 8080"));
//! ```

/// Log a message at the given level.
///
/// # Examples
///
/// ```
/// # use rust_template_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_template_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_template_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_template_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
