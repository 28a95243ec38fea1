//! Console appender implementation

use crate::core::{Appender, LogLevel, LoggerError, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Writes each line to standard output
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Color whole lines by level. Only the console copy is colored; the
    /// string returned to the caller and file output stay plain.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_template_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_colors(true);
    /// ```
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn decorate(&self, level: LogLevel, line: &str) -> String {
        #[cfg(feature = "console")]
        {
            if self.use_colors {
                return line.color(level.color_code()).to_string();
            }
        }
        #[cfg(not(feature = "console"))]
        let _ = (level, self.use_colors);
        line.to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, level: LogLevel, line: &str) -> Result<()> {
        let output = self.decorate(level, line);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)
            .map_err(|e| LoggerError::io_operation("writing to stdout", e.to_string(), e))
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
