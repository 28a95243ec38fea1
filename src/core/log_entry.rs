//! Log entry structure

use super::content::Content;
use super::log_level::LogLevel;
use super::serializer::SerializerRef;

/// One log call, ready to be formatted. Built per call and discarded once
/// rendered.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: String,
    pub content: Content,
    pub serializer: Option<SerializerRef>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: timestamp.into(),
            content: Content::Empty,
            serializer: None,
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_serializer(mut self, serializer: impl Into<SerializerRef>) -> Self {
        self.serializer = Some(serializer.into());
        self
    }
}
