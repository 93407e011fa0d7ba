//! Filter trait for record transformations

use super::log_record::LogRecord;

/// Record-to-record transformation applied between the threshold check and
/// the transports.
///
/// Filters run in registration order; each one receives the previous
/// filter's output and must return a complete record.
pub trait Filter: Send + Sync {
    fn filter(&self, record: LogRecord) -> LogRecord;

    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> Filter for F
where
    F: Fn(LogRecord) -> LogRecord + Send + Sync,
{
    fn filter(&self, record: LogRecord) -> LogRecord {
        self(record)
    }
}
