//! Core logger types and traits

pub mod config;
pub mod error;
pub mod filter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metadata;
pub mod tag;
pub mod transport;

pub use config::{parse_tag_levels, LoggerConfig};
pub use error::{LoggerError, Result};
pub use filter::Filter;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerService, LoggerServiceBuilder};
pub use metadata::{LogValue, Metadata};
pub use tag::{derive_tag_from_seed, TAG_DEFAULT};
pub use transport::Transport;
