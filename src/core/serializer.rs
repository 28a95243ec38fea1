//! Content serializers and the registry that names them

use super::content::Content;
use super::error::{LoggerError, Result};
use super::request::RequestSerializer;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Transforms raw content before it is rendered.
///
/// With `stringify` set the caller wants text for templated output and a
/// serializer that supports it returns a `Value::String`. Otherwise the
/// structured form is returned and merged into JSON output. Returning
/// `Value::Null` means "nothing to add".
pub trait Serializer: Send + Sync {
    fn serialize(&self, content: &Content, stringify: bool) -> Value;
}

impl<F> Serializer for F
where
    F: Fn(&Content, bool) -> Value + Send + Sync,
{
    fn serialize(&self, content: &Content, stringify: bool) -> Value {
        self(content, stringify)
    }
}

/// How a log call names its serializer
#[derive(Clone)]
pub enum SerializerRef {
    Inline(Arc<dyn Serializer>),
    Named(String),
}

impl SerializerRef {
    pub fn inline<S: Serializer + 'static>(serializer: S) -> Self {
        SerializerRef::Inline(Arc::new(serializer))
    }
}

impl fmt::Debug for SerializerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializerRef::Inline(_) => f.write_str("Inline(..)"),
            SerializerRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl From<&str> for SerializerRef {
    fn from(name: &str) -> Self {
        SerializerRef::Named(name.to_string())
    }
}

impl From<String> for SerializerRef {
    fn from(name: String) -> Self {
        SerializerRef::Named(name)
    }
}

impl From<Arc<dyn Serializer>> for SerializerRef {
    fn from(serializer: Arc<dyn Serializer>) -> Self {
        SerializerRef::Inline(serializer)
    }
}

/// Name to serializer mapping
#[derive(Clone, Default)]
pub struct SerializerRegistry {
    entries: HashMap<String, Arc<dyn Serializer>>,
}

impl SerializerRegistry {
    /// An empty registry, without the built-ins
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the `request` serializer, also known as `express`
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let request: Arc<dyn Serializer> = Arc::new(RequestSerializer);
        registry.register_arc("request", Arc::clone(&request));
        registry.register_arc("express", request);
        registry
    }

    pub fn register<S: Serializer + 'static>(&mut self, name: impl Into<String>, serializer: S) {
        self.register_arc(name, Arc::new(serializer));
    }

    pub fn register_arc(&mut self, name: impl Into<String>, serializer: Arc<dyn Serializer>) {
        self.entries.insert(name.into(), serializer);
    }

    /// Merge `other` into this registry; entries in `other` win
    pub fn merge(&mut self, other: SerializerRegistry) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Serializer>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Resolve a reference from a log call against this registry
    pub fn resolve(&self, reference: &SerializerRef) -> Result<Arc<dyn Serializer>> {
        match reference {
            SerializerRef::Inline(serializer) => Ok(Arc::clone(serializer)),
            SerializerRef::Named(name) => self
                .get(name)
                .cloned()
                .ok_or_else(|| LoggerError::serializer_not_found(name.as_str())),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtins_present() {
        let registry = SerializerRegistry::with_builtins();
        assert!(registry.contains("request"));
        assert!(registry.contains("express"));
        assert_eq!(registry.names(), vec!["express", "request"]);
    }

    #[test]
    fn test_resolve_missing_name() {
        let registry = SerializerRegistry::with_builtins();
        let err = registry.resolve(&"nope".into()).err().expect("missing serializer");
        assert!(matches!(err, LoggerError::SerializerNotFound { ref name } if name == "nope"));
    }

    #[test]
    fn test_resolve_inline() {
        let registry = SerializerRegistry::new();
        let reference = SerializerRef::inline(|_: &Content, _: bool| json!("inline"));
        let serializer = registry.resolve(&reference).expect("inline resolves");
        assert_eq!(serializer.serialize(&Content::Empty, true), json!("inline"));
    }

    #[test]
    fn test_merge_overrides_builtin() {
        let mut registry = SerializerRegistry::with_builtins();
        let mut user = SerializerRegistry::new();
        user.register("request", |_: &Content, _: bool| json!("custom"));
        user.register("upper", |content: &Content, _: bool| {
            json!(content.render().unwrap_or_default().to_uppercase())
        });
        registry.merge(user);

        let request = registry.resolve(&"request".into()).expect("request");
        assert_eq!(request.serialize(&Content::Empty, false), json!("custom"));
        assert!(registry.contains("express"));
        assert!(registry.contains("upper"));
    }
}
