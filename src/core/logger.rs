//! Logger handles and the service that creates them

use super::{
    config::{parse_tag_levels, LoggerConfig},
    error::{LoggerError, Result},
    filter::Filter,
    log_level::LogLevel,
    log_record::LogRecord,
    metadata::{LogValue, Metadata},
    tag::{derive_tag_from_seed, merge_tags},
    transport::Transport,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A tagged dispatch handle.
///
/// Handles are cheap to clone and never change after creation: [`tag`] and
/// [`meta`] return new handles that share the same configuration. Every log
/// call runs the whole pipeline on the calling thread before returning.
///
/// [`tag`]: Logger::tag
/// [`meta`]: Logger::meta
#[derive(Clone)]
pub struct Logger {
    config: Arc<LoggerConfig>,
    tags: Arc<[String]>,
    meta: Option<Arc<Metadata>>,
}

impl Logger {
    fn from_parts(
        config: Arc<LoggerConfig>,
        tags: Arc<[String]>,
        meta: Option<Arc<Metadata>>,
    ) -> Self {
        Self { config, tags, meta }
    }

    /// Log `args` at `level`.
    ///
    /// An empty argument list is a no-op: no record is built and no filter
    /// or transport runs.
    pub fn log<I>(&self, level: LogLevel, args: I)
    where
        I: IntoIterator,
        I::Item: Into<LogValue>,
    {
        let args: Vec<LogValue> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return;
        }

        let record = LogRecord {
            args,
            level,
            tags: self.tags.to_vec(),
            meta: self.meta.as_deref().cloned(),
        };
        self.config.dispatch(record);
    }

    #[inline]
    pub fn debug<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<LogValue>,
    {
        self.log(LogLevel::Debug, args);
    }

    #[inline]
    pub fn info<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<LogValue>,
    {
        self.log(LogLevel::Info, args);
    }

    #[inline]
    pub fn warn<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<LogValue>,
    {
        self.log(LogLevel::Warn, args);
    }

    #[inline]
    pub fn error<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<LogValue>,
    {
        self.log(LogLevel::Error, args);
    }

    /// Shortcut for an info-level call.
    #[inline]
    pub fn say<I>(&self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<LogValue>,
    {
        self.log(LogLevel::Info, args);
    }

    /// Derive a handle with `tags` appended to this handle's tags.
    ///
    /// Tags already present (and empty strings) are skipped, so the result
    /// keeps first-seen order without duplicates. With no tags at all the
    /// handle comes back unchanged.
    ///
    /// ```
    /// use rust_tagged_logger::LoggerService;
    ///
    /// let log = LoggerService::new().logger().tag(["db"]);
    /// let pool = log.tag(["pool", "db"]);
    ///
    /// assert_eq!(log.tags(), ["db"]);
    /// assert_eq!(pool.tags(), ["db", "pool"]);
    /// ```
    #[must_use]
    pub fn tag<I, S>(&self, tags: I) -> Logger
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extra: Vec<String> = tags.into_iter().map(Into::into).collect();
        if extra.is_empty() {
            return self.clone();
        }

        Self::from_parts(
            Arc::clone(&self.config),
            merge_tags(&self.tags, extra).into(),
            self.meta.clone(),
        )
    }

    /// Derive a handle whose metadata is `meta`.
    ///
    /// This replaces, rather than merges with, any metadata the receiver
    /// carries.
    #[must_use]
    pub fn meta(&self, meta: impl Into<Metadata>) -> Logger {
        Self::from_parts(
            Arc::clone(&self.config),
            Arc::clone(&self.tags),
            Some(Arc::new(meta.into())),
        )
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.meta.as_deref()
    }

    /// Whether a call at `level` would get past the threshold check.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.config.is_enabled(level, &self.tags)
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tags", &self.tags)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

/// Owns one configuration and hands out [`Logger`]s bound to it.
///
/// Services are independent of each other; nothing is registered globally.
///
/// # Example
/// ```
/// use rust_tagged_logger::prelude::*;
///
/// let service = LoggerService::builder()
///     .transport(NoopTransport)
///     .tag_level("db", LogLevel::Warn)
///     .build();
///
/// let log = service.logger_for("src/db/pool.rs");
/// assert_eq!(log.tags(), ["pool"]);
/// log.info(["connected"]);
/// ```
#[derive(Clone, Debug)]
pub struct LoggerService {
    config: Arc<LoggerConfig>,
}

impl LoggerService {
    /// A service with no transports, no filters and the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        LoggerServiceBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerServiceBuilder {
        LoggerServiceBuilder::new()
    }

    /// An untagged handle without metadata.
    pub fn logger(&self) -> Logger {
        Logger::from_parts(Arc::clone(&self.config), Arc::from(Vec::new()), None)
    }

    /// A handle tagged from a caller-identifying seed such as `file!()`.
    ///
    /// See [`derive_tag_from_seed`](crate::derive_tag_from_seed).
    pub fn logger_for(&self, seed: &str) -> Logger {
        let tags: Arc<[String]> = derive_tag_from_seed(seed).into_iter().collect();
        Logger::from_parts(Arc::clone(&self.config), tags, None)
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

impl Default for LoggerService {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`LoggerService`] with a fluent API
///
/// # Example
/// ```
/// use rust_tagged_logger::prelude::*;
///
/// let memory = MemoryTransport::new();
/// let service = LoggerService::builder()
///     .transport(memory.clone())
///     .filter(NoopFilter)
///     .default_level(LogLevel::Debug)
///     .tag_level("http", LogLevel::Warn)
///     .build();
///
/// service.logger().debug(["booting"]);
/// assert_eq!(memory.len(), 1);
/// ```
pub struct LoggerServiceBuilder {
    transports: Vec<Box<dyn Transport>>,
    filters: Vec<Box<dyn Filter>>,
    tag_levels: HashMap<String, LogLevel>,
}

impl LoggerServiceBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            transports: Vec::new(),
            filters: Vec::new(),
            tag_levels: HashMap::new(),
        }
    }

    /// Add a transport; transports receive records in the order added
    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transports.push(Box::new(transport));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transports.push(transport);
        self
    }

    /// Add a filter; filters run in the order added
    #[must_use = "builder methods return a new value"]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_filter(mut self, filter: Box<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the threshold for one tag
    #[must_use = "builder methods return a new value"]
    pub fn tag_level(mut self, tag: impl Into<String>, level: LogLevel) -> Self {
        self.tag_levels.insert(tag.into(), level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn tag_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = (S, LogLevel)>,
        S: Into<String>,
    {
        self.tag_levels
            .extend(levels.into_iter().map(|(tag, level)| (tag.into(), level)));
        self
    }

    /// Set the threshold for [`TAG_DEFAULT`](crate::TAG_DEFAULT)
    #[must_use = "builder methods return a new value"]
    pub fn default_level(self, level: LogLevel) -> Self {
        self.tag_level(super::tag::TAG_DEFAULT, level)
    }

    /// Apply level directives such as `"warn,db=debug"`
    ///
    /// See [`parse_tag_levels`](crate::parse_tag_levels).
    pub fn directives(self, directives: &str) -> Result<Self> {
        Ok(self.tag_levels(parse_tag_levels(directives)?))
    }

    /// Apply level directives read from the environment variable `name`
    ///
    /// An unset variable leaves the builder unchanged.
    pub fn env_directives(self, name: &str) -> Result<Self> {
        self.lookup_directives(name, std::env::var(name))
    }

    fn lookup_directives(
        self,
        name: &str,
        lookup: std::result::Result<String, std::env::VarError>,
    ) -> Result<Self> {
        match lookup {
            Ok(value) => self.directives(&value),
            Err(std::env::VarError::NotPresent) => Ok(self),
            Err(e) => Err(LoggerError::env_var(name, e.to_string())),
        }
    }

    /// Build the LoggerService
    pub fn build(self) -> LoggerService {
        LoggerService {
            config: Arc::new(LoggerConfig::new(
                self.transports,
                self.filters,
                self.tag_levels,
            )),
        }
    }
}

impl Default for LoggerServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TAG_DEFAULT;
    use crate::transports::MemoryTransport;

    fn service_with(memory: &MemoryTransport, default: LogLevel) -> LoggerService {
        LoggerService::builder()
            .transport(memory.clone())
            .default_level(default)
            .build()
    }

    #[test]
    fn test_builder_default() {
        let service = LoggerServiceBuilder::default().build();
        assert_eq!(service.config().default_threshold(), LogLevel::Info);
        assert!(service.config().transport_names().is_empty());
    }

    #[test]
    fn test_empty_tag_call_returns_same_identity() {
        let log = LoggerService::new().logger().tag(["a"]).meta([("k", 1)]);
        let same = log.tag(Vec::<String>::new());

        assert_eq!(same.tags(), log.tags());
        assert_eq!(same.metadata(), log.metadata());
    }

    #[test]
    fn test_tag_keeps_metadata() {
        let log = LoggerService::new().logger().meta([("k", "v")]);
        let tagged = log.tag(["x"]);
        assert_eq!(tagged.metadata(), Some(&Metadata::from([("k", "v")])));
    }

    #[test]
    fn test_meta_keeps_tags() {
        let log = LoggerService::new().logger().tag(["x", "y"]);
        let with_meta = log.meta(Metadata::new().with_field("a", 1));
        assert_eq!(with_meta.tags(), ["x", "y"]);
        assert!(log.metadata().is_none());
    }

    #[test]
    fn test_say_logs_at_info() {
        let memory = MemoryTransport::new();
        let log = service_with(&memory, LogLevel::Info).logger();

        log.say(["hi"]);
        assert_eq!(memory.levels(), vec![LogLevel::Info]);
    }

    #[test]
    fn test_is_enabled_follows_tags() {
        let service = LoggerService::builder()
            .tag_level("db", LogLevel::Error)
            .build();
        let log = service.logger();

        assert!(log.is_enabled(LogLevel::Info));
        assert!(!log.tag(["db"]).is_enabled(LogLevel::Warn));
    }

    #[test]
    fn test_directives() {
        let service = LoggerService::builder()
            .directives("error,db=debug")
            .unwrap()
            .build();

        assert_eq!(service.config().threshold(TAG_DEFAULT), LogLevel::Error);
        assert_eq!(service.config().threshold("db"), LogLevel::Debug);
        assert!(LoggerService::builder().directives("db=?").is_err());
    }

    #[test]
    fn test_env_directives_value() {
        let var = "APP_LOG_LEVELS";
        let service = LoggerService::builder()
            .lookup_directives(var, Ok("warn,jobs=debug".to_string()))
            .unwrap()
            .build();

        assert_eq!(service.config().default_threshold(), LogLevel::Warn);
        assert_eq!(service.config().threshold("jobs"), LogLevel::Debug);

        let err = LoggerService::builder()
            .lookup_directives(var, Ok("jobs=loud".to_string()))
            .err()
            .unwrap();
        assert!(matches!(err, LoggerError::InvalidDirective { .. }));
    }

    #[test]
    fn test_env_directives_not_unicode() {
        let lookup = Err(std::env::VarError::NotUnicode("\u{fffd}".into()));
        let err = LoggerService::builder()
            .lookup_directives("APP_LOG_LEVELS", lookup)
            .err()
            .unwrap();

        assert!(matches!(err, LoggerError::EnvVar { .. }));
        assert!(err.to_string().contains("APP_LOG_LEVELS"));
    }

    #[test]
    fn test_env_directives_unset_is_noop() {
        let service = LoggerService::builder()
            .default_level(LogLevel::Error)
            .env_directives("RUST_TAGGED_LOGGER_TEST_UNSET")
            .unwrap()
            .build();

        assert_eq!(service.config().default_threshold(), LogLevel::Error);
    }

    #[test]
    fn test_services_are_independent() {
        let first = MemoryTransport::new();
        let second = MemoryTransport::new();
        let a = service_with(&first, LogLevel::Debug);
        let b = service_with(&second, LogLevel::Error);

        a.logger().debug(["a"]);
        b.logger().debug(["b"]);

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }
}
