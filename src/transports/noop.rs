//! Transport that discards everything

use crate::core::{LogRecord, Transport};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransport;

impl Transport for NoopTransport {
    fn send(&self, _record: &LogRecord) {}

    fn name(&self) -> &str {
        "noop"
    }
}
