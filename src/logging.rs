use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::LoggingError;

/// Writes log records to a file, one per line. The terminal is taken over by
/// the game, so nothing is ever logged to stdout or stderr.
pub struct FileLogger {
    level: LevelFilter,
    out: Mutex<File>,
}

impl FileLogger {
    pub fn new(out: File, level: LevelFilter) -> FileLogger {
        FileLogger {
            level,
            out: Mutex::new(out),
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Installs a [`FileLogger`] writing to `path`, truncating it first.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;
    log::set_boxed_logger(Box::new(FileLogger::new(out, level)))?;
    log::set_max_level(level);
    Ok(())
}
