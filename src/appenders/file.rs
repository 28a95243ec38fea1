//! File appender implementation

use crate::core::{Appender, LogLevel, LoggerError, Result};
#[cfg(feature = "file")]
use fs2::FileExt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends lines to a file, creating it when missing.
///
/// The file is opened for every line and closed again, so nothing is
/// buffered and a failed write is reported to the caller straight away.
/// With the `file` feature the write happens under an exclusive advisory
/// lock, keeping lines from several processes whole.
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> LoggerError {
        LoggerError::io_operation(
            format!("appending to '{}'", self.path().display()),
            e.to_string(),
            e,
        )
    }
}

impl Appender for FileAppender {
    fn append(&self, _level: LogLevel, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        let mut output = String::with_capacity(line.len() + 1);
        output.push_str(line);
        output.push('\n');

        #[cfg(feature = "file")]
        FileExt::lock_exclusive(&file).map_err(|e| self.io_error(e))?;

        let written = file.write_all(output.as_bytes());

        #[cfg(feature = "file")]
        FileExt::unlock(&file).map_err(|e| self.io_error(e))?;

        written.map_err(|e| self.io_error(e))
    }

    fn name(&self) -> &str {
        "file"
    }
}
