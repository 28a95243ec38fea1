//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// Receives one rendered line per call. The line carries no trailing
/// newline; adding one is the appender's job.
pub trait Appender: Send + Sync {
    fn append(&self, level: LogLevel, line: &str) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
