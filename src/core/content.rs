//! Structured content attached to a log call
//!
//! Content is whatever the caller wants logged next to the message. Each
//! kind has its own text rendering for templated output and its own way of
//! merging into JSON output.

use serde_json::{Map, Value};
use std::error::Error as StdError;

/// Error-like content: a message plus the stack trace text to print.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContent {
    pub message: String,
    pub stack: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    /// No content
    #[default]
    Empty,
    /// String, number or bool
    Scalar(Value),
    Sequence(Vec<Value>),
    Error(ErrorContent),
    Record(Map<String, Value>),
}

impl Content {
    /// Capture an error and its chain of sources.
    ///
    /// The stack text is the error itself followed by one `Caused by:` line
    /// per source.
    pub fn error(err: &(dyn StdError + 'static)) -> Self {
        let message = err.to_string();
        let mut stack = format!("Error: {}", message);
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    Caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        Content::Error(ErrorContent { message, stack })
    }

    /// Error content with an explicit stack trace text
    pub fn error_with_stack(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Content::Error(ErrorContent {
            message: message.into(),
            stack: stack.into(),
        })
    }

    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Content::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Content that templated output leaves out: nothing, `false`, zero or
    /// an empty string. Sequences, records and errors always count.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Content::Empty => true,
            Content::Scalar(value) => is_falsy(value),
            _ => false,
        }
    }

    /// The content as a single JSON value
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Content::Empty => Value::Null,
            Content::Scalar(value) => value.clone(),
            Content::Sequence(items) => Value::Array(items.clone()),
            Content::Error(err) => {
                let mut map = Map::new();
                map.insert("error".to_string(), Value::String(err.message.clone()));
                map.insert("stack".to_string(), Value::String(err.stack.clone()));
                Value::Object(map)
            }
            Content::Record(map) => Value::Object(map.clone()),
        }
    }

    /// Structural stringification used by templated output.
    ///
    /// Sequences are bracketed and joined with `", "` without quoting
    /// strings, errors print their stack text, records print as JSON with
    /// two-space indentation and scalars print as-is.
    pub fn render(&self) -> serde_json::Result<String> {
        match self {
            Content::Empty => Ok(String::new()),
            Content::Scalar(value) => render_value(value),
            Content::Sequence(items) => render_sequence(items),
            Content::Error(err) if err.stack.is_empty() => Ok(err.message.clone()),
            Content::Error(err) => Ok(err.stack.clone()),
            Content::Record(map) => serde_json::to_string_pretty(map),
        }
    }
}

/// Whether a JSON value is left out of templated output, see [`Content::is_falsy`]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Render an arbitrary JSON value with the same rules as [`Content::render`]
pub fn render_value(value: &Value) -> serde_json::Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(items) => render_sequence(items),
        Value::Object(map) => serde_json::to_string_pretty(map),
    }
}

fn render_sequence(items: &[Value]) -> serde_json::Result<String> {
    let parts = items
        .iter()
        .map(|item| match item {
            // nested records stay on one line inside a sequence
            Value::Object(_) => serde_json::to_string(item),
            other => render_value(other),
        })
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(format!("[{}]", parts.join(", ")))
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Content::Empty,
            Value::Array(items) => Content::Sequence(items),
            Value::Object(map) => Content::Record(map),
            scalar => Content::Scalar(scalar),
        }
    }
}

impl From<Map<String, Value>> for Content {
    fn from(map: Map<String, Value>) -> Self {
        Content::Record(map)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Scalar(Value::String(s))
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Scalar(Value::String(s.to_string()))
    }
}

impl From<i64> for Content {
    fn from(i: i64) -> Self {
        Content::Scalar(Value::from(i))
    }
}

impl From<i32> for Content {
    fn from(i: i32) -> Self {
        Content::Scalar(Value::from(i))
    }
}

impl From<f64> for Content {
    fn from(f: f64) -> Self {
        Content::from(Value::from(f))
    }
}

impl From<bool> for Content {
    fn from(b: bool) -> Self {
        Content::Scalar(Value::Bool(b))
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
