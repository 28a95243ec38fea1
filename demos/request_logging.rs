//! Request logging example
//!
//! Demonstrates the built-in request serializer and a custom serializer.
//!
//! Run with: cargo run --example request_logging

use rust_template_logger::prelude::*;
use serde_json::{json, Value};

fn main() -> Result<()> {
    println!("=== Rust Template Logger - Request Logging Example ===\n");

    let logger = Logger::builder()
        .json(true)
        .serializer("redact", |content: &Content, _stringify: bool| match content {
            Content::Record(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| {
                        let v = if k == "password" { json!("***") } else { v.clone() };
                        (k.clone(), v)
                    })
                    .collect(),
            ),
            _ => Value::Null,
        })
        .build()?;

    println!("1. An HTTP exchange through the request serializer:");
    let exchange = RequestLog::new(
        RequestInfo::new("GET", "/items?page=2")
            .with_original_url("/api/items?page=2")
            .with_query(json!({"page": "2"}))
            .with_header("X-Correlation-Id", "c0ffee")
            .with_remote("127.0.0.1", 52100),
    )
    .response(ResponseInfo::new(200).with_local("tokenValid", json!(true)))
    .field("durationMs", 14);
    logger.info_serialized("request handled", exchange, "request")?;

    println!("\n2. A custom serializer:");
    logger.info_serialized(
        "login",
        json!({"user": "alice", "password": "hunter2"}),
        "redact",
    )?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
