//! Logger configuration
//!
//! [`LoggerOptions`] is what users supply, either in code or as JSON.
//! [`LoggerConfig`] is the validated snapshot the logger works from. A
//! snapshot is always rebuilt from defaults plus the supplied options, so
//! reconfiguring never keeps values from the previous configuration.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::output::OutputSpec;
use super::output_format::{OutputFormat, DEFAULT_TEMPLATE};
use super::serializer::{Serializer, SerializerRegistry};
use super::timestamp::TimestampFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The `logLevel` option: a level name or its number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LevelSetting {
    Number(i64),
    Name(String),
}

impl LevelSetting {
    pub fn resolve(&self) -> Result<LogLevel> {
        let level = match self {
            LevelSetting::Number(n) => LogLevel::from_number(*n),
            LevelSetting::Name(name) => name
                .parse::<LogLevel>()
                .ok()
                .or_else(|| name.trim().parse::<i64>().ok().and_then(LogLevel::from_number)),
        };
        level.ok_or_else(|| {
            LoggerError::config(
                "logLevel",
                format!(
                    "expected debug, info, warn, error or 1-4, got {}",
                    self.describe()
                ),
            )
        })
    }

    fn describe(&self) -> String {
        match self {
            LevelSetting::Number(n) => n.to_string(),
            LevelSetting::Name(name) => format!("'{}'", name),
        }
    }
}

impl From<LogLevel> for LevelSetting {
    fn from(level: LogLevel) -> Self {
        LevelSetting::Number(level.as_number() as i64)
    }
}

impl From<&str> for LevelSetting {
    fn from(name: &str) -> Self {
        LevelSetting::Name(name.to_string())
    }
}

impl From<i64> for LevelSetting {
    fn from(n: i64) -> Self {
        LevelSetting::Number(n)
    }
}

/// User supplied options. Every field is optional; absent fields take
/// their default.
///
/// # Examples
///
/// ```
/// use rust_template_logger::core::LoggerOptions;
///
/// let options = LoggerOptions::from_json_str(r#"{
///     "logLevel": "info",
///     "logFormat": "%L %C",
///     "output": {"error": {"file": "/var/log/app/error.log"}, "all": "console"}
/// }"#).unwrap();
/// assert_eq!(options.log_format.as_deref(), Some("%L %C"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggerOptions {
    pub log_level: Option<LevelSetting>,
    /// `"iso"` or a strftime pattern
    pub timestamp_format: Option<String>,
    pub log_format: Option<String>,
    pub output: Option<OutputSpec>,
    /// Merged over the built-in serializers. Code only.
    #[serde(skip)]
    pub serializers: SerializerRegistry,
    pub log_as_json: Option<bool>,
    /// Directory for `<level>.log` files, used when `output` is absent
    pub log_file_path: Option<PathBuf>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON text. Malformed options are configuration
    /// errors.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("options", e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                format!("reading options from '{}'", path.display()),
                e.to_string(),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn log_level(mut self, level: impl Into<LevelSetting>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn log_format(mut self, template: impl Into<String>) -> Self {
        self.log_format = Some(template.into());
        self
    }

    #[must_use]
    pub fn output(mut self, output: OutputSpec) -> Self {
        self.output = Some(output);
        self
    }

    #[must_use]
    pub fn serializer<S: Serializer + 'static>(mut self, name: impl Into<String>, serializer: S) -> Self {
        self.serializers.register(name, serializer);
        self
    }

    #[must_use]
    pub fn log_as_json(mut self, enabled: bool) -> Self {
        self.log_as_json = Some(enabled);
        self
    }

    #[must_use]
    pub fn log_file_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_file_path = Some(dir.into());
        self
    }
}

/// Validated configuration snapshot
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub timestamp_format: TimestampFormat,
    pub template: String,
    pub log_as_json: bool,
    pub output: OutputSpec,
    pub serializers: SerializerRegistry,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Debug,
            timestamp_format: TimestampFormat::Iso8601,
            template: DEFAULT_TEMPLATE.to_string(),
            log_as_json: false,
            output: OutputSpec::default(),
            serializers: SerializerRegistry::with_builtins(),
        }
    }
}

impl LoggerConfig {
    /// Build a snapshot from defaults plus `options`
    pub fn from_options(options: LoggerOptions) -> Result<Self> {
        let defaults = Self::default();

        let min_level = match options.log_level {
            Some(ref setting) => setting.resolve()?,
            None => defaults.min_level,
        };

        let timestamp_format = match options.timestamp_format {
            Some(ref format) => TimestampFormat::parse(format)?,
            None => defaults.timestamp_format,
        };

        let output = match (options.output, options.log_file_path) {
            (Some(output), _) => output,
            (None, Some(dir)) => OutputSpec::level_files(dir),
            (None, None) => defaults.output,
        };

        let mut serializers = defaults.serializers;
        serializers.merge(options.serializers);

        Ok(Self {
            min_level,
            timestamp_format,
            template: options.log_format.unwrap_or(defaults.template),
            log_as_json: options.log_as_json.unwrap_or(defaults.log_as_json),
            output,
            serializers,
        })
    }

    /// Whether a call at `level` passes the minimum level
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.log_as_json {
            OutputFormat::Json
        } else {
            OutputFormat::Template(self.template.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Content;
    use crate::core::output::Destination;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_options(LoggerOptions::new()).unwrap();
        assert_eq!(config.min_level, LogLevel::Debug);
        assert_eq!(config.timestamp_format, TimestampFormat::Iso8601);
        assert_eq!(config.template, "%T %L %C");
        assert!(!config.log_as_json);
        assert_eq!(config.output, OutputSpec::default());
        assert!(config.serializers.contains("request"));
    }

    #[test]
    fn test_level_setting_forms() {
        for (setting, expected) in [
            (LevelSetting::from("warn"), LogLevel::Warn),
            (LevelSetting::from("ERROR"), LogLevel::Error),
            (LevelSetting::from(2i64), LogLevel::Info),
            (LevelSetting::from("3"), LogLevel::Warn),
            (LevelSetting::from(LogLevel::Debug), LogLevel::Debug),
        ] {
            assert_eq!(setting.resolve().unwrap(), expected);
        }
    }

    #[test]
    fn test_invalid_level_rejected() {
        for setting in [
            LevelSetting::from("foo"),
            LevelSetting::from(0i64),
            LevelSetting::from(5i64),
        ] {
            let err = LoggerConfig::from_options(LoggerOptions::new().log_level(setting))
                .unwrap_err();
            assert!(err.is_configuration());
        }
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let err = LoggerConfig::from_options(LoggerOptions::new().timestamp_format("%Q"))
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_user_serializers_merge_with_builtins() {
        let options = LoggerOptions::new()
            .serializer("shout", |c: &Content, _: bool| {
                json!(c.render().unwrap_or_default().to_uppercase())
            });
        let config = LoggerConfig::from_options(options).unwrap();
        assert!(config.serializers.contains("shout"));
        assert!(config.serializers.contains("request"));
        assert!(config.serializers.contains("express"));
    }

    #[test]
    fn test_log_file_path_builds_level_files() {
        let config =
            LoggerConfig::from_options(LoggerOptions::new().log_file_path("/var/log/app")).unwrap();
        assert_eq!(
            config.output.destinations_for(LogLevel::Info),
            vec![
                &Destination::file("/var/log/app/info.log"),
                &Destination::Console
            ]
        );
    }

    #[test]
    fn test_output_wins_over_log_file_path() {
        let options = LoggerOptions::new()
            .log_file_path("/var/log/app")
            .output(OutputSpec::single(Destination::Discard));
        let config = LoggerConfig::from_options(options).unwrap();
        assert_eq!(config.output, OutputSpec::single(Destination::Discard));
    }

    #[test]
    fn test_from_json() {
        let options = LoggerOptions::from_json_str(
            r#"{"logLevel": 3, "timestampFormat": "%H:%M", "logAsJson": true, "output": "none"}"#,
        )
        .unwrap();
        let config = LoggerConfig::from_options(options).unwrap();
        assert_eq!(config.min_level, LogLevel::Warn);
        assert_eq!(
            config.timestamp_format,
            TimestampFormat::Custom("%H:%M".to_string())
        );
        assert!(config.log_as_json);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output, OutputSpec::single(Destination::Discard));
    }

    #[test]
    fn test_from_json_errors_are_configuration_errors() {
        for json in [
            r#"{"logLevel": 2.5}"#,
            r#"{"unknownOption": true}"#,
            r#"{"output": "syslog"}"#,
            r#"not json"#,
        ] {
            let err = LoggerOptions::from_json_str(json).unwrap_err();
            assert!(err.is_configuration(), "{} should be rejected", json);
        }
    }

    #[test]
    fn test_is_enabled() {
        let config =
            LoggerConfig::from_options(LoggerOptions::new().log_level(LogLevel::Info)).unwrap();
        assert!(!config.is_enabled(LogLevel::Debug));
        assert!(config.is_enabled(LogLevel::Info));
        assert!(config.is_enabled(LogLevel::Error));
    }
}
