//! Main logger implementation

use super::{
    appender::Appender,
    config::{LoggerConfig, LoggerOptions},
    content::Content,
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    output::{OutputRouter, OutputSpec},
    serializer::{Serializer, SerializerRef},
    timestamp::{system_clock, Clock},
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Leveled logger with template or JSON formatting.
///
/// Every call reads one configuration snapshot, so a concurrent
/// [`set_config`](Logger::set_config) is seen either completely or not at
/// all. Calls return the exact text that was emitted, or `None` when the
/// level is below the configured minimum.
///
/// # Example
///
/// ```
/// use rust_template_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .template("%L %C")
///     .output(OutputSpec::single(Destination::Discard))
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.debug("hidden").unwrap(), None);
/// assert_eq!(logger.warn("shown").unwrap().as_deref(), Some("3 shown"));
/// ```
pub struct Logger {
    config: RwLock<Arc<LoggerConfig>>,
    router: OutputRouter,
    clock: Clock,
}

impl Logger {
    /// Logger with the default configuration, printing to stdout
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RwLock::new(Arc::new(LoggerConfig::default())),
            router: OutputRouter::new(Arc::new(ConsoleAppender::new())),
            clock: system_clock(),
        }
    }

    pub fn with_options(options: LoggerOptions) -> Result<Self> {
        Self::builder().options(options).build()
    }

    /// Replace the whole configuration. On error the current configuration
    /// stays in place.
    pub fn set_config(&self, options: LoggerOptions) -> Result<()> {
        let config = LoggerConfig::from_options(options)?;
        *self.config.write() = Arc::new(config);
        Ok(())
    }

    /// The current configuration snapshot
    pub fn config(&self) -> Arc<LoggerConfig> {
        Arc::clone(&self.config.read())
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.config.read().is_enabled(level)
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> Result<Option<String>> {
        self.dispatch(level, message.into(), Content::Empty, None)
    }

    pub fn log_with(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        content: impl Into<Content>,
    ) -> Result<Option<String>> {
        self.dispatch(level, message.into(), content.into(), None)
    }

    pub fn log_serialized(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        content: impl Into<Content>,
        serializer: impl Into<SerializerRef>,
    ) -> Result<Option<String>> {
        self.dispatch(
            level,
            message.into(),
            content.into(),
            Some(serializer.into()),
        )
    }

    fn dispatch(
        &self,
        level: LogLevel,
        message: String,
        content: Content,
        serializer: Option<SerializerRef>,
    ) -> Result<Option<String>> {
        let config = self.config();
        if !config.is_enabled(level) {
            return Ok(None);
        }

        let timestamp = config.timestamp_format.format(&(self.clock)());
        let entry = LogEntry {
            level,
            message,
            timestamp,
            content,
            serializer,
        };

        let line = config.output_format().format(&entry, &config.serializers)?;
        self.router.route(&config.output, level, &line)?;
        Ok(Some(line))
    }

    pub fn flush(&self) -> Result<()> {
        self.router.console().flush()
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<Option<String>> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<Option<String>> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) -> Result<Option<String>> {
        self.log(LogLevel::Warn, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<Option<String>> {
        self.log(LogLevel::Error, message)
    }

    /// Debug message with content
    pub fn debug_with(
        &self,
        message: impl Into<String>,
        content: impl Into<Content>,
    ) -> Result<Option<String>> {
        self.log_with(LogLevel::Debug, message, content)
    }

    pub fn info_with(
        &self,
        message: impl Into<String>,
        content: impl Into<Content>,
    ) -> Result<Option<String>> {
        self.log_with(LogLevel::Info, message, content)
    }

    pub fn warn_with(
        &self,
        message: impl Into<String>,
        content: impl Into<Content>,
    ) -> Result<Option<String>> {
        self.log_with(LogLevel::Warn, message, content)
    }

    pub fn error_with(
        &self,
        message: impl Into<String>,
        content: impl Into<Content>,
    ) -> Result<Option<String>> {
        self.log_with(LogLevel::Error, message, content)
    }

    /// Debug message with content passed through a serializer
    pub fn debug_serialized(
        &self,
        message: impl Into<String>,
        content: impl Into<Content>,
        serializer: impl Into<SerializerRef>,
    ) -> Result<Option<String>> {
        self.log_serialized(LogLevel::Debug, message, content, serializer)
    }

    pub fn info_serialized(
        &self,
        message: impl Into<String>,
        content: impl Into<Content>,
        serializer: impl Into<SerializerRef>,
    ) -> Result<Option<String>> {
        self.log_serialized(LogLevel::Info, message, content, serializer)
    }

    pub fn warn_serialized(
        &self,
        message: impl Into<String>,
        content: impl Into<Content>,
        serializer: impl Into<SerializerRef>,
    ) -> Result<Option<String>> {
        self.log_serialized(LogLevel::Warn, message, content, serializer)
    }

    pub fn error_serialized(
        &self,
        message: impl Into<String>,
        content: impl Into<Content>,
        serializer: impl Into<SerializerRef>,
    ) -> Result<Option<String>> {
        self.log_serialized(LogLevel::Error, message, content, serializer)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a Logger with custom configuration
///
/// Collects [`LoggerOptions`] plus the pieces that only exist in code: the
/// console appender and the clock.
///
/// # Example
///
/// ```
/// use rust_template_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .json(true)
///     .output(OutputSpec::per_level().level(LogLevel::Error, Destination::Console))
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    options: LoggerOptions,
    console: Option<Arc<dyn Appender>>,
    clock: Option<Clock>,
}

impl LoggerBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            console: None,
            clock: None,
        }
    }

    /// Start from a complete set of options
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.options = self.options.log_level(level);
        self
    }

    /// `"iso"` or a strftime pattern, validated by [`build`](Self::build)
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.options = self.options.timestamp_format(format);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.options = self.options.log_format(template);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn json(mut self, enabled: bool) -> Self {
        self.options = self.options.log_as_json(enabled);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: OutputSpec) -> Self {
        self.options = self.options.output(output);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn serializer<S: Serializer + 'static>(
        mut self,
        name: impl Into<String>,
        serializer: S,
    ) -> Self {
        self.options = self.options.serializer(name, serializer);
        self
    }

    /// Where `console` destinations write. Defaults to stdout.
    #[must_use = "builder methods return a new value"]
    pub fn console_appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.console = Some(appender);
        self
    }

    /// Time source for timestamps. Defaults to the system clock.
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the Logger, validating the collected options
    pub fn build(self) -> Result<Logger> {
        let config = LoggerConfig::from_options(self.options)?;
        let console = self
            .console
            .unwrap_or_else(|| Arc::new(ConsoleAppender::new()));

        Ok(Logger {
            config: RwLock::new(Arc::new(config)),
            router: OutputRouter::new(console),
            clock: self.clock.unwrap_or_else(system_clock),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
