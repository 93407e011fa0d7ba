//! Logging macros for heterogeneous argument lists.
//!
//! Each argument is converted with `LogValue::from`, so strings, numbers,
//! booleans and nested values can be mixed freely in one call.
//!
//! # Examples
//!
//! ```
//! use rust_tagged_logger::prelude::*;
//! use rust_tagged_logger::{info, metadata};
//!
//! let log = LoggerService::new().logger();
//!
//! // Basic logging
//! info!(log, "Server started");
//!
//! // Mixed argument types
//! let port = 8080;
//! info!(log, "listening on port", port, true);
//!
//! // With metadata
//! let log = log.meta(metadata! { "request_id" => "abc-123", "attempt" => 2 });
//! info!(log, "request received");
//! ```

/// Log arguments at an explicit level.
///
/// With no arguments the call is a no-op, exactly like an empty list.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = LoggerService::new().logger();
/// use rust_tagged_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code:", 500);
/// log!(logger, LogLevel::Warn);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::LogValue> =
            ::std::vec![$($crate::LogValue::from($arg)),*];
        $logger.log($level, args)
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = LoggerService::new().logger();
/// use rust_tagged_logger::debug;
/// debug!(logger, "Counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $arg)*)
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = LoggerService::new().logger();
/// use rust_tagged_logger::info;
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $arg)*)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = LoggerService::new().logger();
/// use rust_tagged_logger::warn;
/// warn!(logger, "Retry attempt", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn $(, $arg)*)
    };
}

/// Log an error-level message.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// # let logger = LoggerService::new().logger();
/// use rust_tagged_logger::error;
/// error!(logger, "Failed to connect to database");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $arg)*)
    };
}

/// Build a [`Metadata`](crate::Metadata) from `key => value` pairs.
#[macro_export]
macro_rules! metadata {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::Metadata::new()$(.with_field($key, $value))*
    };
}

/// A logger tagged after the current source file.
///
/// ```
/// # use rust_tagged_logger::prelude::*;
/// use rust_tagged_logger::file_logger;
///
/// let service = LoggerService::new();
/// let log = file_logger!(service);
/// assert_eq!(log.tags().len(), 1);
/// ```
#[macro_export]
macro_rules! file_logger {
    ($service:expr) => {
        $service.logger_for(::std::file!())
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, LogValue, LoggerService};
    use crate::transports::MemoryTransport;

    fn capture(default: LogLevel) -> (MemoryTransport, crate::core::Logger) {
        let memory = MemoryTransport::new();
        let service = LoggerService::builder()
            .transport(memory.clone())
            .default_level(default)
            .build();
        (memory, service.logger())
    }

    #[test]
    fn test_log_macro_mixed_args() {
        let (memory, logger) = capture(LogLevel::Info);
        log!(logger, LogLevel::Info, "Formatted:", 42, 1.5, false);

        let record = memory.last().unwrap();
        assert_eq!(
            record.args,
            vec![
                LogValue::from("Formatted:"),
                LogValue::Int(42),
                LogValue::Float(1.5),
                LogValue::Bool(false)
            ]
        );
    }

    #[test]
    fn test_macro_accepts_lengths_and_counts() {
        let (memory, logger) = capture(LogLevel::Info);
        let items = vec![1, 2, 3];
        info!(logger, "items", items.len(), "total", u64::MAX);

        assert_eq!(memory.messages(), vec!["items 3 total 18446744073709551615"]);
    }

    #[test]
    fn test_level_macros() {
        let (memory, logger) = capture(LogLevel::Debug);
        debug!(logger, "d");
        info!(logger, "i");
        warn!(logger, "w");
        error!(logger, "e");

        assert_eq!(
            memory.levels(),
            vec![LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error]
        );
    }

    #[test]
    fn test_macro_without_args_is_noop() {
        let (memory, logger) = capture(LogLevel::Debug);
        info!(logger);
        log!(logger, LogLevel::Error);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_metadata_macro() {
        let meta = metadata! { "a" => 1, "b" => "two" };
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.get("b"), Some(&LogValue::from("two")));
    }

    #[test]
    fn test_file_logger_macro() {
        let service = LoggerService::new();
        let log = file_logger!(service);
        assert_eq!(log.tags(), ["macros"]);
    }
}
