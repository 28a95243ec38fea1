//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod content;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod output;
pub mod output_format;
pub mod request;
pub mod serializer;
pub mod timestamp;

pub use appender::Appender;
pub use config::{LevelSetting, LoggerConfig, LoggerOptions};
pub use content::{Content, ErrorContent};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use output::{Destination, OutputRouter, OutputSpec};
pub use output_format::{apply_template, OutputFormat, DEFAULT_TEMPLATE};
pub use request::{ConnectionInfo, RequestInfo, RequestLog, RequestSerializer, ResponseInfo};
pub use serializer::{Serializer, SerializerRef, SerializerRegistry};
pub use timestamp::{system_clock, Clock, TimestampFormat};
