//! Criterion benchmarks for rust_template_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_template_logger::prelude::*;
use serde_json::json;

fn discard_logger(builder: LoggerBuilder) -> Logger {
    builder
        .output(OutputSpec::single(Destination::Discard))
        .build()
        .expect("valid configuration")
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    group.bench_function("from_json_options", |b| {
        b.iter(|| {
            let options = LoggerOptions::from_json_str(black_box(
                r#"{"logLevel": "info", "output": {"error": {"file": "/tmp/e.log"}, "all": "none"}}"#,
            ))
            .unwrap();
            black_box(Logger::with_options(options).unwrap())
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_templated(c: &mut Criterion) {
    let mut group = c.benchmark_group("templated");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(Logger::builder());

    group.bench_function("message_only", |b| {
        b.iter(|| logger.info(black_box("Info message")).unwrap());
    });

    group.bench_function("record_content", |b| {
        let content = json!({"user": "alice", "attempt": 3, "ok": true});
        b.iter(|| {
            logger
                .info_with(black_box("login"), content.clone())
                .unwrap()
        });
    });

    group.bench_function("suppressed", |b| {
        let quiet = discard_logger(Logger::builder().min_level(LogLevel::Error));
        b.iter(|| quiet.debug(black_box("Debug message")).unwrap());
    });

    group.finish();
}

fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(Logger::builder().json(true));

    group.bench_function("record_content", |b| {
        let content = json!({"user": "alice", "attempt": 3, "ok": true});
        b.iter(|| {
            logger
                .info_with(black_box("login"), content.clone())
                .unwrap()
        });
    });

    group.bench_function("request_serializer", |b| {
        let content = json!({
            "req": {"method": "GET", "originalUrl": "/api/items?page=2", "query": {"page": "2"}},
            "res": {"statusCode": 200},
        });
        b.iter(|| {
            logger
                .info_serialized(black_box("request"), content.clone(), "request")
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_logger_creation, bench_templated, bench_json);
criterion_main!(benches);
