//! In-memory appender, for capturing console output

use crate::core::{Appender, LogLevel, Result};
use parking_lot::Mutex;

/// Keeps every line it receives. Install it as the console appender to
/// observe what would have been printed.
///
/// # Example
///
/// ```
/// use rust_template_logger::appenders::MemoryAppender;
/// use rust_template_logger::Logger;
/// use std::sync::Arc;
///
/// let capture = Arc::new(MemoryAppender::new());
/// let logger = Logger::builder()
///     .template("%L %C")
///     .console_appender(capture.clone())
///     .build()
///     .unwrap();
///
/// logger.info("hello").unwrap();
/// assert_eq!(capture.lines(), vec!["2 hello"]);
/// ```
#[derive(Default)]
pub struct MemoryAppender {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&self, level: LogLevel, line: &str) -> Result<()> {
        self.entries.lock().push((level, line.to_string()));
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
