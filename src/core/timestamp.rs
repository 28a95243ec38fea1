//! Timestamp formatting utilities
//!
//! Entries carry their timestamp as text. It is either ISO 8601 with
//! milliseconds (the default) or a user supplied strftime pattern.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current time. Injectable so that output is reproducible.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The default clock, reading the system time
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_template_logger::core::TimestampFormat;
///
/// let iso: TimestampFormat = TimestampFormat::parse("iso").unwrap();
/// assert_eq!(iso, TimestampFormat::Iso8601);
///
/// let custom = TimestampFormat::parse("%d.%m.%Y-%H:%M").unwrap();
/// assert_eq!(custom, TimestampFormat::Custom("%d.%m.%Y-%H:%M".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// Custom strftime format, validated when parsed
    Custom(String),
}

impl TimestampFormat {
    /// Parse the `timestampFormat` option: `"iso"` or a strftime pattern.
    ///
    /// Patterns chrono cannot interpret are rejected here so that
    /// formatting never fails later.
    pub fn parse(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("iso") {
            return Ok(TimestampFormat::Iso8601);
        }
        if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "timestampFormat",
                format!("invalid strftime pattern '{}'", value),
            ));
        }
        Ok(TimestampFormat::Custom(value.to_string()))
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
