//! Pattern 1: Chain of Responsibility
//!
//! Loggers sit in an ordered `Vec` instead of a linked list of successors.
//! A message is offered to every logger, head to tail. Each logger whose
//! threshold is at or below the message level writes one line; the rest
//! pass it along without writing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sink::{Sink, Stdout};

// =============================================================================
// Severity levels
// =============================================================================

/// Message severity. Higher is more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "LevelRepr", into = "u32")]
pub struct Level(pub u32);

impl Level {
    pub const INFO: Level = Level(1);
    pub const DEBUG: Level = Level(2);
    pub const ERROR: Level = Level(3);

    pub fn name(self) -> Option<&'static str> {
        match self {
            Level::INFO => Some("INFO"),
            Level::DEBUG => Some("DEBUG"),
            Level::ERROR => Some("ERROR"),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown level '{input}': expected info, debug, error or an integer")]
pub struct ParseLevelError {
    pub input: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u32>() {
            return Ok(Level(value));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "info" => Ok(Level::INFO),
            "debug" => Ok(Level::DEBUG),
            "error" => Ok(Level::ERROR),
            _ => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}

/// Config files may spell a level as `2` or as `"debug"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(u32),
    Name(String),
}

impl TryFrom<LevelRepr> for Level {
    type Error = ParseLevelError;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Number(value) => Ok(Level(value)),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

// =============================================================================
// Loggers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggerKind {
    ErrorConsole,
    File,
    StandardConsole,
}

impl LoggerKind {
    pub fn label(self) -> &'static str {
        match self {
            LoggerKind::ErrorConsole => "Error Console",
            LoggerKind::File => "File",
            LoggerKind::StandardConsole => "Standard Console",
        }
    }
}

/// One link of the chain: a variant plus the lowest level it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    kind: LoggerKind,
    threshold: Level,
}

impl Logger {
    pub fn new(kind: LoggerKind, threshold: Level) -> Self {
        Logger { kind, threshold }
    }

    pub fn error_console(threshold: Level) -> Self {
        Self::new(LoggerKind::ErrorConsole, threshold)
    }

    pub fn file(threshold: Level) -> Self {
        Self::new(LoggerKind::File, threshold)
    }

    pub fn standard_console(threshold: Level) -> Self {
        Self::new(LoggerKind::StandardConsole, threshold)
    }

    pub fn kind(&self) -> LoggerKind {
        self.kind
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn accepts(&self, level: Level) -> bool {
        self.threshold <= level
    }

    pub fn render(&self, message: &str) -> String {
        format!("{}::Logger:{message}", self.kind.label())
    }
}

// =============================================================================
// Chain
// =============================================================================

/// Consuming builder; the chain's order is fixed once `build` runs.
#[derive(Debug, Default, Clone)]
#[must_use = "a builder does nothing until build() is called"]
pub struct ChainBuilder {
    loggers: Vec<Logger>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `logger` as the successor of the current tail.
    pub fn then(mut self, logger: Logger) -> Self {
        self.loggers.push(logger);
        self
    }

    pub fn build(self) -> Chain<Stdout> {
        self.build_with(Stdout)
    }

    pub fn build_with<S: Sink>(self, sink: S) -> Chain<S> {
        tracing::debug!(len = self.loggers.len(), "assembled logger chain");
        Chain {
            loggers: self.loggers,
            sink,
        }
    }
}

impl FromIterator<Logger> for ChainBuilder {
    fn from_iter<I: IntoIterator<Item = Logger>>(iter: I) -> Self {
        ChainBuilder {
            loggers: iter.into_iter().collect(),
        }
    }
}

pub struct Chain<S = Stdout> {
    loggers: Vec<Logger>,
    sink: S,
}

impl Chain<Stdout> {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }
}

impl<S: Sink> Chain<S> {
    /// Offers `message` to every logger, head first.
    ///
    /// A logger that skips the message still forwards it, so the number of
    /// lines written equals the number of loggers with `threshold <= level`.
    /// An empty chain writes nothing.
    pub fn log_message(&mut self, level: Level, message: &str) {
        for (position, logger) in self.loggers.iter().enumerate() {
            if logger.accepts(level) {
                tracing::trace!(position, kind = ?logger.kind, %level, "logger wrote message");
                self.sink.emit(&logger.render(message));
            } else {
                tracing::trace!(position, kind = ?logger.kind, %level, "logger skipped message");
            }
        }
    }

    pub fn loggers(&self) -> &[Logger] {
        &self.loggers
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S> fmt::Debug for Chain<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("loggers", &self.loggers).finish_non_exhaustive()
    }
}

fn default_builder() -> ChainBuilder {
    ChainBuilder::new()
        .then(Logger::error_console(Level::ERROR))
        .then(Logger::file(Level::DEBUG))
        .then(Logger::standard_console(Level::INFO))
}

/// `[ErrorConsole(ERROR), File(DEBUG), StandardConsole(INFO)]`, printing to stdout.
pub fn default_chain() -> Chain<Stdout> {
    default_builder().build()
}

/// Same layout as [`default_chain`], writing into `sink`.
pub fn default_chain_with<S: Sink>(sink: S) -> Chain<S> {
    default_builder().build_with(sink)
}
