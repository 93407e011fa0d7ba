//! Transport trait for log output destinations

use super::log_record::LogRecord;

/// Final stage of the pipeline: delivers a finished record somewhere.
///
/// Dispatch calls `send` synchronously on the logging thread and ignores the
/// outcome. A transport that can fail handles the failure itself; a panic
/// inside `send` reaches the caller of the log method.
pub trait Transport: Send + Sync {
    fn send(&self, record: &LogRecord);

    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> Transport for F
where
    F: Fn(&LogRecord) + Send + Sync,
{
    fn send(&self, record: &LogRecord) {
        self(record)
    }
}
