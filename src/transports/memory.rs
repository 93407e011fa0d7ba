//! In-memory transport that keeps every record it receives

use crate::core::{LogLevel, LogRecord, Transport};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures records for later inspection.
///
/// Clones share one buffer, so a test can register one clone with the
/// service and read from another.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn levels(&self) -> Vec<LogLevel> {
        self.records.lock().iter().map(|r| r.level).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(LogRecord::message).collect()
    }

    pub fn last(&self) -> Option<LogRecord> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Transport for MemoryTransport {
    fn send(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let memory = MemoryTransport::new();
        let registered = memory.clone();

        registered.send(&LogRecord::new(LogLevel::Warn, vec!["low disk".into()]));

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.messages(), vec!["low disk"]);
        assert_eq!(memory.last().map(|r| r.level), Some(LogLevel::Warn));

        memory.clear();
        assert!(registered.is_empty());
    }
}
