//! Session diagnostics sink.
//!
//! While the terminal surface owns the screen anything written to stderr
//! would corrupt the drawing, so the interpreter records diagnostics here and
//! the caller flushes them to the `log` facade once the surface is released.

use chrono::{DateTime, Local};
use log::Level;

/// A single recorded diagnostic.
#[derive(Debug, Clone)]
pub struct Entry {
    pub at: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

/// Buffered diagnostics for one session.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Entry>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, level: Level, message: impl Into<String>) {
        self.entries.push(Entry {
            at: Local::now(),
            level,
            message: message.into(),
        });
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.record(Level::Debug, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.record(Level::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(Level::Warn, message);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Forwards every buffered entry to the `log` facade and empties the buffer.
    pub fn flush(&mut self) {
        for entry in self.entries.drain(..) {
            log::log!(
                entry.level,
                "[{}] {}",
                entry.at.format("%H:%M:%S%.3f"),
                entry.message
            );
        }
    }
}
