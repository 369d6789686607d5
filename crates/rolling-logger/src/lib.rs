//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards every record to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:<5} [{}] {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Logger with a bounded buffer of recent lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a line, evicting the oldest once the buffer is full
    pub fn push(&self, line: LogLine) {
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: chrono::Utc::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &LogLine) {
    let text = wasm_bindgen::JsValue::from_str(&line.to_string());
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        Level::Info => web_sys::console::info_1(&text),
        Level::Debug | Level::Trace => web_sys::console::log_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &LogLine) {
    eprintln!("{}", line);
}

/// Install the global logger. Only the first call wins.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}
