//! Basic logger usage example
//!
//! Demonstrates the level functions, templates and level filtering.
//!
//! Run with: cargo run --example basic_usage

use rust_template_logger::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Rust Template Logger - Basic Usage Example ===\n");

    let logger = Logger::new();

    println!("1. Logging at different levels (default template \"%T %L %C\"):");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;

    println!("\n2. Content is rendered after the message:");
    logger.info_with("Record content", json!({"user": "alice", "attempts": 3}))?;
    logger.info_with("Sequence content", Content::sequence(["a", "b", "c"]))?;

    println!("\n3. Minimum level set to info, debug is suppressed:");
    logger.set_config(LoggerOptions::new().log_level("info").log_format("[%L] %C"))?;
    if logger.debug("Debug message (hidden)")?.is_none() {
        println!("   (debug call returned None)");
    }
    logger.info("Info message (visible)")?;

    println!("\n4. JSON mode:");
    logger.set_config(LoggerOptions::new().log_as_json(true))?;
    logger.warn_with("Disk almost full", json!({"free_gb": 2}))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
