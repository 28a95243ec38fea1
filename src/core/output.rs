//! Destinations and the router that fans rendered entries out to them
//!
//! An [`OutputSpec`] is either one destination used for every level, or a
//! per-level map plus an `all` list. The `all` list is additive: it runs
//! after the level's own destinations, never instead of them.

use super::appender::Appender;
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use crate::appenders::FileAppender;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A sink for rendered lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output
    Console,
    /// Drop the line
    Discard,
    /// Append to a file. A missing path is reported on the first write.
    File { path: Option<PathBuf> },
}

impl Destination {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Destination::File {
            path: Some(path.into()),
        }
    }

    /// Parse `"console"`, `"none"` or `{"file": path}`
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(token) => match token.as_str() {
                "console" => Ok(Destination::Console),
                "none" => Ok(Destination::Discard),
                other => Err(LoggerError::config(
                    "output",
                    format!("unknown destination '{}'", other),
                )),
            },
            Value::Object(map) => {
                if let Some(key) = map.keys().find(|key| key.as_str() != "file") {
                    return Err(LoggerError::config(
                        "output",
                        format!("unexpected key '{}' in file destination", key),
                    ));
                }
                let path = map
                    .get("file")
                    .and_then(Value::as_str)
                    .filter(|path| !path.is_empty())
                    .map(PathBuf::from);
                Ok(Destination::File { path })
            }
            other => Err(LoggerError::config(
                "output",
                format!("expected a destination, got {}", other),
            )),
        }
    }

    fn list_from_value(value: &Value) -> Result<Vec<Self>> {
        match value {
            Value::Array(items) => items.iter().map(Self::from_value).collect(),
            single => Ok(vec![Self::from_value(single)?]),
        }
    }
}

/// Where entries go
///
/// # Examples
///
/// ```
/// use rust_template_logger::core::{Destination, LogLevel, OutputSpec};
///
/// let spec = OutputSpec::per_level()
///     .level(LogLevel::Error, Destination::file("/var/log/app/error.log"))
///     .all(Destination::Console);
/// assert_eq!(spec.destinations_for(LogLevel::Error).len(), 2);
/// assert_eq!(spec.destinations_for(LogLevel::Info).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum OutputSpec {
    Single(Destination),
    PerLevel {
        levels: BTreeMap<LogLevel, Vec<Destination>>,
        all: Vec<Destination>,
    },
}

impl Default for OutputSpec {
    /// `{all: "console"}`
    fn default() -> Self {
        OutputSpec::per_level().all(Destination::Console)
    }
}

impl OutputSpec {
    pub fn single(destination: Destination) -> Self {
        OutputSpec::Single(destination)
    }

    /// An empty per-level map, to be filled with [`level`](Self::level) and
    /// [`all`](Self::all)
    pub fn per_level() -> Self {
        OutputSpec::PerLevel {
            levels: BTreeMap::new(),
            all: Vec::new(),
        }
    }

    /// One file per level, `<dir>/<level>.log`, plus console for everything
    pub fn level_files(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        LogLevel::ALL
            .iter()
            .fold(OutputSpec::per_level(), |spec, level| {
                spec.level(*level, Destination::file(dir.join(format!("{}.log", level))))
            })
            .all(Destination::Console)
    }

    /// Add a destination for `level`. Turns a single destination into a
    /// per-level map that keeps it under `all`.
    #[must_use]
    pub fn level(self, level: LogLevel, destination: Destination) -> Self {
        let (mut levels, all) = self.into_parts();
        levels.entry(level).or_default().push(destination);
        OutputSpec::PerLevel { levels, all }
    }

    #[must_use]
    pub fn all(self, destination: Destination) -> Self {
        let (levels, mut all) = self.into_parts();
        all.push(destination);
        OutputSpec::PerLevel { levels, all }
    }

    fn into_parts(self) -> (BTreeMap<LogLevel, Vec<Destination>>, Vec<Destination>) {
        match self {
            OutputSpec::Single(destination) => (BTreeMap::new(), vec![destination]),
            OutputSpec::PerLevel { levels, all } => (levels, all),
        }
    }

    /// Destinations for `level` in the order they are written
    pub fn destinations_for(&self, level: LogLevel) -> Vec<&Destination> {
        match self {
            OutputSpec::Single(destination) => vec![destination],
            OutputSpec::PerLevel { levels, all } => levels
                .get(&level)
                .into_iter()
                .flatten()
                .chain(all.iter())
                .collect(),
        }
    }
}

impl TryFrom<Value> for OutputSpec {
    type Error = LoggerError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(ref map) if !map.contains_key("file") => {
                let mut levels = BTreeMap::new();
                let mut all = Vec::new();
                for (key, entry) in map {
                    if key == "all" {
                        all = Destination::list_from_value(entry)?;
                        continue;
                    }
                    let level: LogLevel = key
                        .parse()
                        .map_err(|e: String| LoggerError::config("output", e))?;
                    levels.insert(level, Destination::list_from_value(entry)?);
                }
                Ok(OutputSpec::PerLevel { levels, all })
            }
            single => Ok(OutputSpec::Single(Destination::from_value(&single)?)),
        }
    }
}

/// Writes rendered lines to the destinations an [`OutputSpec`] selects
pub struct OutputRouter {
    console: Arc<dyn Appender>,
}

impl OutputRouter {
    pub fn new(console: Arc<dyn Appender>) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &Arc<dyn Appender> {
        &self.console
    }

    /// Write `line` everywhere `spec` sends `level`. The first failure stops
    /// the fan-out and is returned.
    pub fn route(&self, spec: &OutputSpec, level: LogLevel, line: &str) -> Result<()> {
        for destination in spec.destinations_for(level) {
            self.write(destination, level, line)?;
        }
        Ok(())
    }

    fn write(&self, destination: &Destination, level: LogLevel, line: &str) -> Result<()> {
        match destination {
            Destination::Console => self.console.append(level, line),
            Destination::Discard => Ok(()),
            Destination::File { path: Some(path) } => FileAppender::new(path).append(level, line),
            Destination::File { path: None } => Err(LoggerError::missing_file_path(level.to_str())),
        }
    }
}
