//! Pattern 2: Observer
//!
//! Run with: cargo run --bin observer

use behavioral_patterns::sink::{Sink, Stdout};
use behavioral_patterns::{telemetry, PatternsConfig};
use colored::Colorize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = PatternsConfig::default();
    let mut subject = config.build_subject(Stdout);
    tracing::info!(observers = subject.observer_count(), "subject ready");

    println!("{}", "=== Observer ===".bold());
    for (round, value) in [("first", 15), ("second", 10)] {
        println!("{}", format!("The {round} state changes to: {value}").cyan());
        subject.set_value(value);
        subject.sink_mut().emit("");
    }

    Ok(())
}
