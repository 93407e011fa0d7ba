//! Filter that passes records through untouched

use crate::core::{Filter, LogRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFilter;

impl Filter for NoopFilter {
    fn filter(&self, record: LogRecord) -> LogRecord {
        record
    }

    fn name(&self) -> &str {
        "noop"
    }
}
