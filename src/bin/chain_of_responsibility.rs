//! Pattern 1: Chain of Responsibility
//!
//! Run with: cargo run --bin chain_of_responsibility

use behavioral_patterns::sink::Stdout;
use behavioral_patterns::{telemetry, Level, PatternsConfig};
use colored::Colorize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = PatternsConfig::default();
    let mut chain = config.build_chain(Stdout);
    tracing::info!(loggers = chain.len(), "chain ready");

    println!("{}", "=== Chain of Responsibility ===".bold());
    chain.log_message(Level::INFO, "This is an information.");
    chain.log_message(Level::DEBUG, "This is a debug level information.");
    chain.log_message(Level::ERROR, "This is an error information.");

    Ok(())
}
