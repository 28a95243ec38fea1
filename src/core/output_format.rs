//! Output format for log entries
//!
//! Provides the two ways an entry can be rendered:
//! - Template: `%T`, `%L` and `%C` placeholders substituted into a string
//! - Json: one compact JSON object per entry

use super::content::{is_falsy, render_value};
use super::error::Result;
use super::log_entry::LogEntry;
use super::serializer::SerializerRegistry;
use serde_json::{Map, Value};

/// Template used when none is configured
pub const DEFAULT_TEMPLATE: &str = "%T %L %C";

/// Output format for log entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Template substitution
    ///
    /// Example with `"%T %L %C"`: `2025-01-08T10:30:45.123Z 2 Request processed`
    Template(String),

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","message":"Request processed","level":2}`
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Template(DEFAULT_TEMPLATE.to_string())
    }
}

impl OutputFormat {
    /// Render a log entry, resolving its serializer against `serializers`
    pub fn format(&self, entry: &LogEntry, serializers: &SerializerRegistry) -> Result<String> {
        match self {
            OutputFormat::Template(template) => {
                let content = Self::template_content(entry, serializers)?;
                let body = join_message(&entry.message, &content);
                Ok(apply_template(
                    template,
                    &entry.timestamp,
                    &entry.level.as_number().to_string(),
                    &body,
                ))
            }
            OutputFormat::Json => Self::format_json(entry, serializers),
        }
    }

    /// Content text for templated output
    fn template_content(entry: &LogEntry, serializers: &SerializerRegistry) -> Result<String> {
        if let Some(ref reference) = entry.serializer {
            let serializer = serializers.resolve(reference)?;
            match serializer.serialize(&entry.content, true) {
                Value::Null => {}
                value if is_falsy(&value) => return Ok(String::new()),
                Value::String(text) => return Ok(text),
                other => return Ok(render_value(&other)?),
            }
        }
        if entry.content.is_falsy() {
            return Ok(String::new());
        }
        Ok(entry.content.render()?)
    }

    /// Format as JSON
    fn format_json(entry: &LogEntry, serializers: &SerializerRegistry) -> Result<String> {
        let mut json_obj = Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            Value::String(entry.timestamp.clone()),
        );
        json_obj.insert("message".to_string(), Value::String(entry.message.clone()));
        json_obj.insert("level".to_string(), Value::from(entry.level.as_number()));

        let merged = match entry.serializer {
            Some(ref reference) => match serializers
                .resolve(reference)?
                .serialize(&entry.content, false)
            {
                Value::Null => entry.content.to_value(),
                value => value,
            },
            None => entry.content.to_value(),
        };

        match merged {
            Value::Null => {}
            // base fields are never overwritten
            Value::Object(fields) => {
                for (key, value) in fields {
                    if !json_obj.contains_key(&key) {
                        json_obj.insert(key, value);
                    }
                }
            }
            other => {
                json_obj.insert("content".to_string(), other);
            }
        }

        Ok(serde_json::to_string(&Value::Object(json_obj))?)
    }
}

fn join_message(message: &str, content: &str) -> String {
    match (message.is_empty(), content.is_empty()) {
        (false, false) => format!("{} {}", message, content),
        (_, true) => message.to_string(),
        (true, false) => content.to_string(),
    }
}

/// Substitute `%T`, `%L` and `%C` in one pass. Any other `%` sequence is
/// copied through, and substituted text is not scanned again.
pub fn apply_template(template: &str, timestamp: &str, level: &str, content: &str) -> String {
    let mut out = String::with_capacity(template.len() + timestamp.len() + content.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('T') => out.push_str(timestamp),
            Some('L') => out.push_str(level),
            Some('C') => out.push_str(content),
            _ => {
                out.push('%');
                continue;
            }
        }
        chars.next();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Content;
    use crate::core::error::LoggerError;
    use crate::core::log_level::LogLevel;
    use crate::core::serializer::SerializerRef;
    use serde_json::json;

    const TS: &str = "2025-01-08T10:30:45.123Z";

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry::new(level, message, TS)
    }

    fn template(t: &str) -> OutputFormat {
        OutputFormat::Template(t.to_string())
    }

    #[test]
    fn test_default_template() {
        let registry = SerializerRegistry::with_builtins();
        let out = OutputFormat::default()
            .format(&entry(LogLevel::Info, "started"), &registry)
            .unwrap();
        assert_eq!(out, format!("{} 2 started", TS));
    }

    #[test]
    fn test_level_and_content_only() {
        let registry = SerializerRegistry::with_builtins();
        let out = template("%L %C")
            .format(&entry(LogLevel::Debug, "foo"), &registry)
            .unwrap();
        assert_eq!(out, "1 foo");
    }

    #[test]
    fn test_record_content_pretty_printed() {
        let registry = SerializerRegistry::with_builtins();
        let e = entry(LogLevel::Debug, "foo").with_content(json!({"foo": 1, "bar": 2}));
        let out = template("%L %C").format(&e, &registry).unwrap();
        assert_eq!(out, "1 foo {\n  \"foo\": 1,\n  \"bar\": 2\n}");
    }

    #[test]
    fn test_sequence_content() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Info, "ids").with_content(json!([1, "two", 3]));
        let out = template("%C").format(&e, &registry).unwrap();
        assert_eq!(out, "ids [1, two, 3]");
    }

    #[test]
    fn test_unknown_placeholders_pass_through() {
        assert_eq!(
            apply_template("%X %T %% %L%C %", "ts", "3", "msg"),
            "%X ts %% 3msg %"
        );
    }

    #[test]
    fn test_substituted_text_not_rescanned() {
        assert_eq!(apply_template("%C|%T", "ts", "1", "%T"), "%T|ts");
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(apply_template("%L-%L", "ts", "4", ""), "4-4");
    }

    #[test]
    fn test_empty_message_uses_content() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Warn, "").with_content("only content");
        let out = template("%C").format(&e, &registry).unwrap();
        assert_eq!(out, "only content");
    }

    #[test]
    fn test_error_content_renders_stack() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Error, "failed")
            .with_content(Content::error_with_stack("boom", "Error: boom\n    at handler"));
        let out = template("%C").format(&e, &registry).unwrap();
        assert_eq!(out, "failed Error: boom\n    at handler");
    }

    #[test]
    fn test_inline_serializer_text() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Info, "user")
            .with_content("alice")
            .with_serializer(SerializerRef::inline(|c: &Content, stringify: bool| {
                assert!(stringify);
                json!(format!("<{}>", c.render().unwrap_or_default()))
            }));
        let out = template("%C").format(&e, &registry).unwrap();
        assert_eq!(out, "user <alice>");
    }

    #[test]
    fn test_null_serializer_result_falls_back_to_content() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Info, "n")
            .with_content(7)
            .with_serializer(SerializerRef::inline(|_: &Content, _: bool| Value::Null));
        let out = template("%C").format(&e, &registry).unwrap();
        assert_eq!(out, "n 7");
    }

    #[test]
    fn test_missing_named_serializer() {
        let registry = SerializerRegistry::with_builtins();
        let e = entry(LogLevel::Debug, "foo")
            .with_content(json!({"a": 1}))
            .with_serializer("nope");
        let err = template("%C").format(&e, &registry).unwrap_err();
        assert!(matches!(err, LoggerError::SerializerNotFound { .. }));

        let err = OutputFormat::Json.format(&e, &registry).unwrap_err();
        assert!(matches!(err, LoggerError::SerializerNotFound { .. }));
    }

    #[test]
    fn test_json_field_order_and_numeric_level() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Warn, "disk").with_content(json!({"free": 10, "unit": "GB"}));
        let out = OutputFormat::Json.format(&e, &registry).unwrap();
        assert_eq!(
            out,
            format!(
                r#"{{"timestamp":"{}","message":"disk","level":3,"free":10,"unit":"GB"}}"#,
                TS
            )
        );
    }

    #[test]
    fn test_json_without_content() {
        let registry = SerializerRegistry::new();
        let out = OutputFormat::Json
            .format(&entry(LogLevel::Debug, "foo"), &registry)
            .unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["timestamp", "message", "level"]);
    }

    #[test]
    fn test_json_scalar_content_under_content_key() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Info, "count").with_content(5);
        let out = OutputFormat::Json.format(&e, &registry).unwrap();
        assert!(out.ends_with(r#""level":2,"content":5}"#));
    }

    #[test]
    fn test_json_named_request_serializer() {
        let registry = SerializerRegistry::with_builtins();
        let e = entry(LogLevel::Info, "request")
            .with_content(json!({
                "req": {"method": "GET", "originalUrl": "test"},
                "res": {"statusCode": 200},
                "foo": "bar",
            }))
            .with_serializer("request");
        let out = OutputFormat::Json.format(&e, &registry).unwrap();
        assert_eq!(
            out,
            format!(
                r#"{{"timestamp":"{}","message":"request","level":2,"method":"GET","url":"test","query":"","statusCode":200,"foo":"bar"}}"#,
                TS
            )
        );
    }

    #[test]
    fn test_json_content_keeps_base_fields() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Info, "m")
            .with_content(json!({"level": "loud", "message": "other", "x": 1}));
        let out = OutputFormat::Json.format(&e, &registry).unwrap();
        assert_eq!(
            out,
            format!(r#"{{"timestamp":"{}","message":"m","level":2,"x":1}}"#, TS)
        );
    }

    #[test]
    fn test_json_inline_serializer_merged_after_base_fields() {
        let registry = SerializerRegistry::with_builtins();
        let e = entry(LogLevel::Error, "job")
            .with_content(json!({"id": 9, "secret": "hunter2"}))
            .with_serializer(SerializerRef::inline(|c: &Content, stringify: bool| {
                assert!(!stringify);
                let id = c.to_value()["id"].clone();
                json!({"jobId": id, "redacted": true})
            }));
        let out = OutputFormat::Json.format(&e, &registry).unwrap();
        assert_eq!(
            out,
            format!(
                r#"{{"timestamp":"{}","message":"job","level":4,"jobId":9,"redacted":true}}"#,
                TS
            )
        );
    }

    #[test]
    fn test_json_null_serializer_result_uses_raw_content() {
        let registry = SerializerRegistry::with_builtins();
        let e = entry(LogLevel::Info, "plain")
            .with_content("not a request")
            .with_serializer("request");
        let out = OutputFormat::Json.format(&e, &registry).unwrap();
        assert!(out.ends_with(r#""level":2,"content":"not a request"}"#));
    }

    #[test]
    fn test_falsy_content_leaves_message_alone() {
        let registry = SerializerRegistry::new();
        for content in [json!(0), json!(false), json!(""), json!(0.0)] {
            let e = entry(LogLevel::Info, "count").with_content(content);
            assert_eq!(template("%L %C").format(&e, &registry).unwrap(), "2 count");
        }
        let e = entry(LogLevel::Info, "count").with_content(1);
        assert_eq!(template("%L %C").format(&e, &registry).unwrap(), "2 count 1");
    }

    #[test]
    fn test_falsy_serializer_result_leaves_message_alone() {
        let registry = SerializerRegistry::new();
        let e = entry(LogLevel::Info, "flag")
            .with_content("ignored")
            .with_serializer(SerializerRef::inline(|_: &Content, _: bool| json!(false)));
        assert_eq!(template("%L %C").format(&e, &registry).unwrap(), "2 flag");
    }

    #[test]
    fn test_request_serializer_on_plain_content() {
        let registry = SerializerRegistry::with_builtins();
        let e = entry(LogLevel::Warn, "msg")
            .with_content("raw text")
            .with_serializer("request");
        assert_eq!(template("%C").format(&e, &registry).unwrap(), "msg raw text");

        let e = entry(LogLevel::Warn, "msg").with_serializer("request");
        assert_eq!(template("%C").format(&e, &registry).unwrap(), "msg");
    }
}
