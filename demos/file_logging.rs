//! File logging example
//!
//! Demonstrates per-level file destinations with an additive "all" console
//! destination.
//!
//! Run with: cargo run --example file_logging

use rust_template_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Template Logger - File Logging Example ===\n");

    let options = LoggerOptions::from_json_str(
        r#"{
            "logFormat": "%T %L %C",
            "timestampFormat": "%d.%m.%Y-%H:%M",
            "output": {
                "warn": {"file": "warnings.log"},
                "error": [{"file": "errors.log"}, {"file": "warnings.log"}],
                "all": "console"
            }
        }"#,
    )?;
    let logger = Logger::with_options(options)?;

    println!("1. Everything goes to the console, warnings and errors also to files:");
    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.warn("Using default settings for some options")?;
    logger.error("Failed to load optional plugin")?;

    println!("\n2. Processing items:");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i))?;
        if i == 3 {
            logger.warn("Item 3 took longer than expected")?;
        }
    }

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'warnings.log' and 'errors.log' for the file output");

    Ok(())
}
