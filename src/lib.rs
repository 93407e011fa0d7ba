//! # Rust Tagged Logger
//!
//! A structured logging facade built around immutable, tagged logger
//! handles.
//!
//! ## Features
//!
//! - **Tagged Handles**: derive loggers with extra tags or metadata without
//!   touching the original
//! - **Per-Tag Thresholds**: a record is emitted only if every tag on it
//!   allows its level
//! - **Filters and Transports**: transform records in order, then fan them
//!   out to any number of sinks
//! - **Synchronous**: every call completes on the calling thread
//!
//! ```
//! use rust_tagged_logger::prelude::*;
//! use rust_tagged_logger::info;
//!
//! let memory = MemoryTransport::new();
//! let service = LoggerService::builder()
//!     .transport(memory.clone())
//!     .tag_level("db", LogLevel::Warn)
//!     .build();
//!
//! let log = service.logger();
//! info!(log, "started", 3, "workers");
//! log.tag(["db"]).info(["suppressed"]);
//!
//! assert_eq!(memory.messages(), vec!["started 3 workers"]);
//! ```

pub mod core;
pub mod filters;
pub mod macros;
pub mod transports;

pub mod prelude {
    pub use crate::filters::{NoopFilter, RedactFilter};
    pub use crate::transports::{ConsoleTransport, JsonTransport, MemoryTransport, NoopTransport};
    pub use crate::core::{
        Filter, LogLevel, LogRecord, LogValue, Logger, LoggerConfig, LoggerError, LoggerService,
        LoggerServiceBuilder, Metadata, Result, Transport, TAG_DEFAULT,
    };
}

pub use crate::core::{
    derive_tag_from_seed, parse_tag_levels, Filter, LogLevel, LogRecord, LogValue, Logger,
    LoggerConfig, LoggerError, LoggerService, LoggerServiceBuilder, Metadata, Result, Transport,
    TAG_DEFAULT,
};
pub use crate::filters::{NoopFilter, RedactFilter};
pub use crate::transports::{ConsoleTransport, JsonTransport, MemoryTransport, NoopTransport};
