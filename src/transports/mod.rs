//! Transport implementations

pub mod console;
pub mod json;
pub mod memory;
pub mod noop;

pub use console::ConsoleTransport;
pub use json::JsonTransport;
pub use memory::MemoryTransport;
pub use noop::NoopTransport;

pub use crate::core::Transport;
