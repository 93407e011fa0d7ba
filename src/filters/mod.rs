//! Filter implementations

pub mod noop;
pub mod redact;

pub use noop::NoopFilter;
pub use redact::RedactFilter;

pub use crate::core::Filter;
