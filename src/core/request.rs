//! Built-in `request` serializer for HTTP request/response pairs
//!
//! The serializer reads a record shaped like `{req, res, ...extra}` where
//! `req` and `res` are the JSON forms of [`RequestInfo`] and
//! [`ResponseInfo`]. Missing pieces are skipped rather than reported, since
//! a log call must not fail because a request was only partly available.

use super::content::Content;
use super::serializer::Serializer;
use serde::Serialize;
use serde_json::{Map, Value};

const CORRELATION_HEADER: &str = "x-correlation-id";

/// Read-only view of an incoming request
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionInfo>,
}

impl RequestInfo {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_original_url(mut self, original_url: impl Into<String>) -> Self {
        self.original_url = Some(original_url.into());
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Map::new)
            .insert(name.into(), Value::String(value.into()));
        self
    }

    #[must_use]
    pub fn with_remote(mut self, address: impl Into<String>, port: u16) -> Self {
        self.connection = Some(ConnectionInfo {
            remote_address: Some(address.into()),
            remote_port: Some(port),
        });
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_port: Option<u16>,
}

/// Read-only view of the outgoing response
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Request-scoped state, where authentication stores `claims` and
    /// `tokenValid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locals: Option<Map<String, Value>>,
}

impl ResponseInfo {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code: Some(status_code),
            locals: None,
        }
    }

    #[must_use]
    pub fn with_local(mut self, key: impl Into<String>, value: Value) -> Self {
        self.locals.get_or_insert_with(Map::new).insert(key.into(), value);
        self
    }
}

/// Content for the request serializer: request, response and extra fields
///
/// # Examples
///
/// ```
/// use rust_template_logger::core::{Content, RequestInfo, RequestLog, ResponseInfo};
///
/// let content: Content = RequestLog::new(RequestInfo::new("GET", "/health"))
///     .response(ResponseInfo::new(200))
///     .field("elapsedMs", 3)
///     .into();
/// assert!(matches!(content, Content::Record(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    req: Option<RequestInfo>,
    res: Option<ResponseInfo>,
    extra: Map<String, Value>,
}

impl RequestLog {
    pub fn new(req: RequestInfo) -> Self {
        Self {
            req: Some(req),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn response(mut self, res: ResponseInfo) -> Self {
        self.res = Some(res);
        self
    }

    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<RequestLog> for Content {
    fn from(log: RequestLog) -> Self {
        let mut map = Map::new();
        if let Some(req) = log.req {
            map.insert("req".to_string(), serde_json::to_value(req).unwrap_or(Value::Null));
        }
        if let Some(res) = log.res {
            map.insert("res".to_string(), serde_json::to_value(res).unwrap_or(Value::Null));
        }
        map.extend(log.extra);
        Content::Record(map)
    }
}

/// Extracts method, url, query, correlation id, remote address, status
/// code and auth claims, then passes the remaining fields through.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSerializer;

impl RequestSerializer {
    pub fn record(&self, content: &Content) -> Map<String, Value> {
        let mut out = Map::new();
        let Content::Record(input) = content else {
            return out;
        };

        if let Some(req) = input.get("req").and_then(Value::as_object) {
            out.insert("method".to_string(), field_or_null(req, "method"));
            let url = req
                .get("originalUrl")
                .filter(|v| !v.is_null())
                .or_else(|| req.get("url"))
                .cloned()
                .unwrap_or(Value::Null);
            out.insert("url".to_string(), url);
            out.insert(
                "query".to_string(),
                req.get("query")
                    .filter(|v| !v.is_null())
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new())),
            );

            if let Some(id) = req
                .get("headers")
                .and_then(Value::as_object)
                .and_then(|headers| header(headers, CORRELATION_HEADER))
            {
                out.insert("correlationId".to_string(), id);
            }

            if let Some(conn) = req.get("connection").and_then(Value::as_object) {
                out.insert("remoteAddress".to_string(), field_or_null(conn, "remoteAddress"));
                out.insert("remotePort".to_string(), field_or_null(conn, "remotePort"));
            }
        }

        if let Some(res) = input.get("res").and_then(Value::as_object) {
            if let Some(status) = res.get("statusCode") {
                out.insert("statusCode".to_string(), status.clone());
            }
            if let Some(locals) = res.get("locals").and_then(Value::as_object) {
                out.insert("claims".to_string(), local_or_empty(locals, "claims"));
                out.insert("tokenValid".to_string(), local_or_empty(locals, "tokenValid"));
            }
        }

        for (key, value) in input {
            if key != "req" && key != "res" {
                out.insert(key.clone(), value.clone());
            }
        }
        out
    }
}

impl Serializer for RequestSerializer {
    fn serialize(&self, content: &Content, stringify: bool) -> Value {
        // nothing to extract; the formatter renders the raw content instead
        if !matches!(content, Content::Record(_)) {
            return Value::Null;
        }
        let record = self.record(content);
        if stringify {
            serde_json::to_string_pretty(&record)
                .map(Value::String)
                .unwrap_or(Value::Null)
        } else {
            Value::Object(record)
        }
    }
}

fn field_or_null(map: &Map<String, Value>, key: &str) -> Value {
    map.get(key).cloned().unwrap_or(Value::Null)
}

fn local_or_empty(locals: &Map<String, Value>, key: &str) -> Value {
    match locals.get(key) {
        None | Some(Value::Null) => Value::String(String::new()),
        Some(value) => value.clone(),
    }
}

fn header(headers: &Map<String, Value>, name: &str) -> Option<Value> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| match value {
            // repeated headers: first value wins
            Value::Array(values) => values.first().cloned().unwrap_or(Value::Null),
            other => other.clone(),
        })
        .filter(|value| !value.is_null())
}
