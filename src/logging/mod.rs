//! Two-sink logging
//!
//! This module installs a process-wide logger with a human-readable
//! console sink and a structured JSON file sink. The logger is
//! installed once per process; reconfiguring replaces the sink state
//! (level and file handle) instead of accumulating sinks.

use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;

use crate::core::constants::paths;
use crate::core::error::Result;

/// Timestamp format for the JSON sink: ISO-8601 UTC with microseconds
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Settings for the two-sink logger
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Minimum severity level for both sinks
    pub level: LevelFilter,

    /// Path of the append-only JSON log file
    pub json_path: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            json_path: PathBuf::from(paths::LOG_OUTPUT_FILE),
        }
    }
}

impl LogSettings {
    /// Settings with the given level and the default JSON log path
    pub fn with_level(level: LevelFilter) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}

/// One structured record as written to the JSON sink.
///
/// Field order fixes the key order of the serialized object.
#[derive(Debug, Serialize)]
struct JsonLogRecord<'a> {
    timestamp: String,
    thread: &'a str,
    logger_name: &'a str,
    level: String,
    message: String,
    function: &'a str,
    line: u32,
}

/// Replaceable sink state shared by all logging calls
struct SinkState {
    level: LevelFilter,
    file: Option<File>,
}

static SINKS: Lazy<Mutex<SinkState>> = Lazy::new(|| {
    Mutex::new(SinkState {
        level: LevelFilter::Off,
        file: None,
    })
});

static LOGGER: TwoSinkLogger = TwoSinkLogger;

/// `log::Log` implementation writing every record to both sinks
pub struct TwoSinkLogger;

impl Log for TwoSinkLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        let mut sinks = SINKS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if record.level() > sinks.level {
            return;
        }

        // Console sink: "<LEVEL> - <message>" on stderr
        eprintln!("{} - {}", record.level(), record.args());

        // File sink: one JSON object per line, append-only. A record
        // that fails to serialize or write is dropped; logging must
        // not take down the host.
        if let Some(file) = sinks.file.as_mut() {
            let thread = thread::current();
            let json_record = JsonLogRecord {
                timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
                thread: thread.name().unwrap_or("unnamed"),
                logger_name: record.target(),
                level: record.level().to_string(),
                message: record.args().to_string(),
                function: record.module_path().unwrap_or("unknown"),
                line: record.line().unwrap_or(0),
            };

            if let Ok(line) = serde_json::to_string(&json_record) {
                let _ = writeln!(file, "{line}");
            }
        }
    }

    fn flush(&self) {
        let mut sinks = SINKS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(file) = sinks.file.as_mut() {
            let _ = file.flush();
        }
    }
}

/// Configure the process-wide logger from the given settings.
///
/// The first call installs the logger; later calls replace the sink
/// state (level and JSON file handle) so records are never duplicated.
/// Failure to open the JSON file is a reportable error and leaves the
/// previous sink state untouched.
pub fn configure(settings: &LogSettings) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.json_path)?;

    {
        let mut sinks = SINKS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sinks.level = settings.level;
        sinks.file = Some(file);
    }

    // Already-installed is fine: the sink state above was replaced.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(settings.level);

    Ok(())
}

/// Log error information with optional source context
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => log::error!("{message}: {err}"),
        None => log::error!("{message}"),
    }
}
