//! Console transport implementation

use crate::core::{LogLevel, LogRecord, Transport};
use chrono::Utc;
#[cfg(feature = "console")]
use colored::Colorize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Prints one line per record.
///
/// Warnings and errors go to stderr, everything else to stdout. The line is
/// `[timestamp] [LEVEL] [tags] args key=value...`, where the timestamp,
/// tags and metadata parts are omitted when disabled or empty.
pub struct ConsoleTransport {
    use_colors: bool,
    show_timestamp: bool,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            show_timestamp: true,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Whether level names are colored; always false without the
    /// `console` feature.
    pub fn uses_colors(&self) -> bool {
        self.use_colors && cfg!(feature = "console")
    }

    #[must_use]
    pub fn with_timestamp(mut self, show_timestamp: bool) -> Self {
        self.show_timestamp = show_timestamp;
        self
    }

    pub(crate) fn format_line(&self, record: &LogRecord) -> String {
        let mut parts = Vec::with_capacity(5);

        if self.show_timestamp {
            parts.push(format!("[{}]", Utc::now().format(TIMESTAMP_FORMAT)));
        }
        parts.push(format!("[{}]", self.format_level(record.level)));
        if !record.tags.is_empty() {
            parts.push(format!("[{}]", record.tags.join(",")));
        }
        parts.push(record.message());
        if let Some(ref meta) = record.meta {
            if !meta.is_empty() {
                parts.push(meta.format_fields());
            }
        }

        parts.join(" ")
    }

    #[cfg(feature = "console")]
    fn format_level(&self, level: LogLevel) -> String {
        let padded = format!("{:5}", level);
        if self.uses_colors() {
            padded.color(level.color_code()).to_string()
        } else {
            padded
        }
    }

    #[cfg(not(feature = "console"))]
    fn format_level(&self, level: LogLevel) -> String {
        format!("{:5}", level)
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ConsoleTransport {
    fn send(&self, record: &LogRecord) {
        let line = self.format_line(record);
        match record.level {
            LogLevel::Warn | LogLevel::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Metadata;

    fn plain() -> ConsoleTransport {
        ConsoleTransport::new().with_colors(false).with_timestamp(false)
    }

    #[test]
    fn test_format_untagged() {
        let record = LogRecord::new(LogLevel::Info, vec!["hello".into(), 7.into()]);
        assert_eq!(plain().format_line(&record), "[INFO ] hello 7");
    }

    #[test]
    fn test_format_tags_and_meta() {
        let record = LogRecord::new(LogLevel::Error, vec!["failed".into()])
            .with_tags(vec!["db".to_string(), "pool".to_string()])
            .with_meta(Some(Metadata::from([("attempt", 3)])));

        assert_eq!(
            plain().format_line(&record),
            "[ERROR] [db,pool] failed attempt=3"
        );
    }

    #[test]
    fn test_color_setting() {
        assert!(!ConsoleTransport::new().with_colors(false).uses_colors());
        assert_eq!(
            ConsoleTransport::new().with_colors(true).uses_colors(),
            cfg!(feature = "console")
        );
    }

    #[test]
    fn test_format_with_timestamp() {
        let record = LogRecord::new(LogLevel::Debug, vec!["tick".into()]);
        let line = ConsoleTransport::new().with_colors(false).format_line(&record);

        assert!(line.starts_with('['));
        assert!(line.contains('T'));
        assert!(line.ends_with("[DEBUG] tick"));
    }
}
