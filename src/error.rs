use std::path::PathBuf;

use thiserror::Error;

use crate::core::Vec2;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level is empty")]
    Empty,
    #[error("row {row} is {width} cells wide, at most {max} allowed")]
    TooWide { row: usize, width: usize, max: usize },
    #[error("level is {height} rows tall, at most {max} allowed")]
    TooTall { height: usize, max: usize },
    #[error("unknown symbol {symbol:?} at column {x}, row {y}")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
    #[error("level has no player start")]
    MissingPlayer,
    #[error("level has a second player start at {second:?} (first at {first:?})")]
    MultiplePlayers { first: Vec2, second: Vec2 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}
