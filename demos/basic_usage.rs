//! Basic logger usage example
//!
//! Demonstrates tagged handles, per-tag thresholds, metadata and filters
//! with the console transport.
//!
//! Run with: cargo run --example basic_usage

use rust_tagged_logger::prelude::*;
use rust_tagged_logger::{file_logger, metadata, warn};

fn main() -> Result<()> {
    println!("=== Rust Tagged Logger - Basic Usage Example ===\n");

    let service = LoggerService::builder()
        .transport(ConsoleTransport::new())
        .filter(RedactFilter::new(["password"]))
        .default_level(LogLevel::Debug)
        .directives("db=warn,cache=off")?
        .build();

    let log = service.logger();

    println!("1. Logging at different levels:");
    log.debug(["This is a debug message"]);
    log.info(["This is an info message"]);
    log.warn(["This is a warning message"]);
    log.error(["This is an error message"]);

    println!("\n2. Tagged handles follow their tag thresholds:");
    let db = log.tag(["db"]);
    db.info(["Info message (hidden, db=warn)"]);
    db.warn(["Warning message (visible)"]);
    log.tag(["cache"]).error(["Error message (hidden, cache=off)"]);

    println!("\n3. Metadata and mixed arguments:");
    let request = log.meta(metadata! { "request_id" => "abc-123", "password" => "hunter2" });
    warn!(request, "slow request took", 812, "ms");

    println!("\n4. Tag from the source file:");
    file_logger!(service).info(["tagged after this file"]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
