//! Shared logger configuration and the dispatch pipeline

use super::{
    error::{LoggerError, Result},
    filter::Filter,
    log_level::LogLevel,
    log_record::LogRecord,
    tag::TAG_DEFAULT,
    transport::Transport,
};
use std::collections::HashMap;
use std::fmt;

/// Immutable configuration shared by every handle of one
/// [`LoggerService`](crate::LoggerService).
///
/// Always carries a threshold for [`TAG_DEFAULT`].
pub struct LoggerConfig {
    transports: Vec<Box<dyn Transport>>,
    filters: Vec<Box<dyn Filter>>,
    tag_levels: HashMap<String, LogLevel>,
}

impl LoggerConfig {
    pub(crate) fn new(
        transports: Vec<Box<dyn Transport>>,
        filters: Vec<Box<dyn Filter>>,
        mut tag_levels: HashMap<String, LogLevel>,
    ) -> Self {
        tag_levels
            .entry(TAG_DEFAULT.to_string())
            .or_insert(LogLevel::Info);

        Self {
            transports,
            filters,
            tag_levels,
        }
    }

    /// Threshold for `tag`, falling back to the default tag's threshold.
    pub fn threshold(&self, tag: &str) -> LogLevel {
        self.tag_levels
            .get(tag)
            .or_else(|| self.tag_levels.get(TAG_DEFAULT))
            .copied()
            .unwrap_or_default()
    }

    pub fn default_threshold(&self) -> LogLevel {
        self.threshold(TAG_DEFAULT)
    }

    pub fn tag_levels(&self) -> &HashMap<String, LogLevel> {
        &self.tag_levels
    }

    /// A record passes only if its level meets the threshold of every tag;
    /// an empty tag set is judged by the default tag alone.
    pub fn is_enabled(&self, level: LogLevel, tags: &[String]) -> bool {
        if tags.is_empty() {
            return level.is_at_least(self.default_threshold());
        }
        tags.iter().all(|tag| level.is_at_least(self.threshold(tag)))
    }

    /// Run a record through threshold check, filters and transports.
    ///
    /// A record without arguments is dropped before anything runs. Filters
    /// see the record only after it passed the threshold check and their
    /// output is not re-checked.
    pub fn dispatch(&self, record: LogRecord) {
        if record.args.is_empty() || !self.is_enabled(record.level, &record.tags) {
            return;
        }

        let record = self
            .filters
            .iter()
            .fold(record, |record, filter| filter.filter(record));

        for transport in &self.transports {
            transport.send(&record);
        }
    }

    pub fn transport_names(&self) -> Vec<&str> {
        self.transports.iter().map(|t| t.name()).collect()
    }

    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), HashMap::new())
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("transports", &self.transport_names())
            .field("filters", &self.filter_names())
            .field("tag_levels", &self.tag_levels)
            .finish()
    }
}

/// Parse a comma-separated list of level directives.
///
/// A bare level (`warn`) sets the [`TAG_DEFAULT`] threshold; `tag=level`
/// sets one tag. Whitespace around items is ignored and empty items are
/// skipped.
///
/// ```
/// use rust_tagged_logger::{parse_tag_levels, LogLevel, TAG_DEFAULT};
///
/// let levels = parse_tag_levels("warn, db=debug, http=off").unwrap();
/// assert_eq!(levels[0], (TAG_DEFAULT.to_string(), LogLevel::Warn));
/// assert_eq!(levels[2], ("http".to_string(), LogLevel::Disabled));
/// ```
pub fn parse_tag_levels(directives: &str) -> Result<Vec<(String, LogLevel)>> {
    directives
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_directive)
        .collect()
}

fn parse_directive(directive: &str) -> Result<(String, LogLevel)> {
    let Some((tag, level)) = directive.split_once('=') else {
        let level = directive
            .parse::<LogLevel>()
            .map_err(|_| LoggerError::directive(directive, "unknown level"))?;
        return Ok((TAG_DEFAULT.to_string(), level));
    };

    let tag = tag.trim();
    if tag.is_empty() {
        return Err(LoggerError::directive(directive, "missing tag"));
    }
    let level = level
        .parse::<LogLevel>()
        .map_err(|_| LoggerError::directive(directive, "unknown level"))?;

    Ok((tag.to_string(), level))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(pairs: &[(&str, LogLevel)]) -> HashMap<String, LogLevel> {
        pairs.iter().map(|(t, l)| (t.to_string(), *l)).collect()
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_threshold_is_seeded() {
        let config = LoggerConfig::default();
        assert_eq!(config.default_threshold(), LogLevel::Info);
        assert_eq!(config.threshold("anything"), LogLevel::Info);
    }

    #[test]
    fn test_explicit_default_is_kept() {
        let config = LoggerConfig::new(
            Vec::new(),
            Vec::new(),
            levels(&[(TAG_DEFAULT, LogLevel::Error)]),
        );
        assert_eq!(config.default_threshold(), LogLevel::Error);
    }

    #[test]
    fn test_every_tag_must_pass() {
        let config = LoggerConfig::new(
            Vec::new(),
            Vec::new(),
            levels(&[(TAG_DEFAULT, LogLevel::Warn), ("tag1", LogLevel::Info)]),
        );

        assert!(config.is_enabled(LogLevel::Info, &tags(&["tag1"])));
        assert!(!config.is_enabled(LogLevel::Info, &tags(&["tag1", "tag2"])));
        assert!(config.is_enabled(LogLevel::Warn, &tags(&["tag1", "tag2"])));
        assert!(!config.is_enabled(LogLevel::Info, &[]));
    }

    #[test]
    fn test_disabled_tag_blocks_errors() {
        let config = LoggerConfig::new(
            Vec::new(),
            Vec::new(),
            levels(&[(TAG_DEFAULT, LogLevel::Debug), ("noisy", LogLevel::Disabled)]),
        );

        assert!(!config.is_enabled(LogLevel::Error, &tags(&["noisy"])));
        assert!(config.is_enabled(LogLevel::Debug, &tags(&["quiet"])));
    }

    #[test]
    fn test_parse_tag_levels() {
        let parsed = parse_tag_levels("info,db=debug , ,cache=WARNING").unwrap();
        assert_eq!(
            parsed,
            vec![
                (TAG_DEFAULT.to_string(), LogLevel::Info),
                ("db".to_string(), LogLevel::Debug),
                ("cache".to_string(), LogLevel::Warn),
            ]
        );
        assert!(parse_tag_levels("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tag_levels_rejects_bad_input() {
        assert!(matches!(
            parse_tag_levels("=warn"),
            Err(LoggerError::InvalidDirective { .. })
        ));
        assert!(matches!(
            parse_tag_levels("db=loud"),
            Err(LoggerError::InvalidDirective { .. })
        ));
        assert!(parse_tag_levels("chatty").is_err());
    }

    #[test]
    fn test_dispatch_drops_empty_record() {
        use crate::transports::MemoryTransport;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let memory = MemoryTransport::new();
        let filter_calls = Arc::new(AtomicUsize::new(0));
        let calls = Arc::clone(&filter_calls);
        let filter = move |record: LogRecord| {
            calls.fetch_add(1, Ordering::SeqCst);
            record
        };
        let config = LoggerConfig::new(
            vec![Box::new(memory.clone()) as Box<dyn Transport>],
            vec![Box::new(filter) as Box<dyn Filter>],
            HashMap::new(),
        );

        config.dispatch(LogRecord::new(LogLevel::Error, Vec::new()));
        assert!(memory.is_empty());
        assert_eq!(filter_calls.load(Ordering::SeqCst), 0);

        config.dispatch(LogRecord::new(LogLevel::Error, vec!["kept".into()]));
        assert_eq!(memory.len(), 1);
        assert_eq!(filter_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_lists_names() {
        let config = LoggerConfig::default();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("TAG_DEFAULT"));
    }
}
