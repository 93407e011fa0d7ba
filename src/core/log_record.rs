//! Log record structure

use super::log_level::LogLevel;
use super::metadata::{LogValue, Metadata};
use serde::{Deserialize, Serialize};

/// One log call, as seen by filters and transports.
///
/// Built fresh for every dispatch. Filters take it by value and hand back
/// the record the next stage should see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub args: Vec<LogValue>,
    pub level: LogLevel,
    /// Empty means the record is governed by the default tag.
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
}

impl LogRecord {
    pub fn new(level: LogLevel, args: Vec<LogValue>) -> Self {
        Self {
            args,
            level,
            tags: Vec::new(),
            meta: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_meta(mut self, meta: Option<Metadata>) -> Self {
        self.meta = meta;
        self
    }

    /// Arguments joined by a single space, as a console would print them.
    pub fn message(&self) -> String {
        self.args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
