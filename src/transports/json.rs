//! JSON lines transport for structured logging

use crate::core::{LogRecord, LoggerError, Result, Transport};
use chrono::Utc;
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Writes each record as a single-line JSON object (JSONL format)
///
/// Every line is written and flushed before `send` returns. Write failures
/// are reported on stderr and counted in [`failed_writes`](Self::failed_writes);
/// they never reach the logging caller.
pub struct JsonTransport {
    writer: Mutex<Box<dyn Write + Send>>,
    include_timestamp: bool,
    failed_writes: AtomicU64,
}

impl JsonTransport {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            include_timestamp: true,
            failed_writes: AtomicU64::new(0),
        }
    }

    /// Append to the file at `path`, creating it if needed
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening JSON log file",
                    path.display().to_string(),
                    e,
                )
            })?;

        Ok(Self::new(file))
    }

    #[must_use]
    pub fn with_timestamp(mut self, include_timestamp: bool) -> Self {
        self.include_timestamp = include_timestamp;
        self
    }

    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    fn to_json(&self, record: &LogRecord) -> Result<String> {
        let mut json_obj = serde_json::Map::new();

        if self.include_timestamp {
            json_obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(Utc::now().to_rfc3339()),
            );
        }
        json_obj.insert("level".to_string(), serde_json::to_value(record.level)?);
        json_obj.insert("tags".to_string(), serde_json::to_value(&record.tags)?);
        json_obj.insert(
            "args".to_string(),
            serde_json::Value::Array(record.args.iter().map(|a| a.to_json_value()).collect()),
        );
        if let Some(ref meta) = record.meta {
            json_obj.insert("meta".to_string(), serde_json::to_value(meta)?);
        }

        Ok(serde_json::to_string(&serde_json::Value::Object(json_obj))?)
    }

    fn write_record(&self, record: &LogRecord) -> Result<()> {
        let line = self.to_json(record)?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

impl Transport for JsonTransport {
    fn send(&self, record: &LogRecord) {
        if let Err(e) = self.write_record(record) {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
            eprintln!("[LOGGER ERROR] JSON transport failed: {}", e);
        }
    }

    fn name(&self) -> &str {
        "json"
    }
}
