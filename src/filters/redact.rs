//! Metadata redaction filter

use crate::core::{Filter, LogRecord, LogValue};
use std::collections::BTreeSet;

pub const REDACTED: &str = "[REDACTED]";

/// Masks the values of selected metadata keys.
///
/// Only keys present on the record are touched; arguments are left alone.
#[derive(Debug, Clone, Default)]
pub struct RedactFilter {
    keys: BTreeSet<String>,
}

impl RedactFilter {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl Filter for RedactFilter {
    fn filter(&self, mut record: LogRecord) -> LogRecord {
        if let Some(ref mut meta) = record.meta {
            for key in &self.keys {
                if let Some(value) = meta.get_mut(key) {
                    *value = LogValue::from(REDACTED);
                }
            }
        }
        record
    }

    fn name(&self) -> &str {
        "redact"
    }
}
