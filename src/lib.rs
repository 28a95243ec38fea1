//! # Rust Template Logger
//!
//! A small synchronous leveled logger. Entries are rendered through a
//! `%T %L %C` template or as one JSON object per line, and routed to the
//! console, files, or nowhere, per level.
//!
//! ## Features
//!
//! - **Templates and JSON**: `%T` timestamp, `%L` numeric level, `%C` content
//! - **Serializers**: named or inline content transforms, with a built-in
//!   `request` serializer for HTTP request/response pairs
//! - **Per-level destinations**: with an additive `all` entry
//! - **Testable**: every call returns the exact text it emitted

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        Appender, Clock, Content, Destination, LevelSetting, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerOptions, OutputFormat, OutputSpec,
        RequestInfo, RequestLog, ResponseInfo, Result, Serializer, SerializerRef,
        SerializerRegistry, TimestampFormat, DEFAULT_TEMPLATE,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use crate::core::{
    Appender, Clock, Content, Destination, LevelSetting, LogEntry, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerOptions, OutputFormat, OutputSpec,
    RequestInfo, RequestLog, ResponseInfo, Result, Serializer, SerializerRef,
    SerializerRegistry, TimestampFormat, DEFAULT_TEMPLATE,
};
