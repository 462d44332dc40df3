//! # Behavioral Patterns in Rust
//!
//! This crate implements the two behavioral patterns whose control flow is
//! more than a single object construction:
//!
//! ## Pattern 1: Chain of Responsibility
//! - Closed set of logger variants, each with a severity threshold
//! - Chain stored as an ordered `Vec`, assembled once by a consuming builder
//! - Every message visits every logger, whether or not an earlier one wrote it
//!
//! ## Pattern 2: Observer
//! - Integer subject that notifies on every mutation
//! - Observers render the current value in hexadecimal, octal or binary
//! - `attach` hands back an id that `detach` accepts
//!
//! Both mechanisms write through a [`Sink`], so the demos print to stdout and
//! the tests record lines in a `Vec<String>`.
//!
//! Run the demos with: `cargo run --bin <name>`
//!
//! ```bash
//! cargo run --bin chain_of_responsibility
//! cargo run --bin observer
//! ```

pub mod chain;
pub mod config;
pub mod observer;
pub mod sink;
pub mod telemetry;

pub use chain::{default_chain, default_chain_with, Chain, ChainBuilder, Level, Logger, LoggerKind, ParseLevelError};
pub use config::{ConfigError, LoggerSpec, PatternsConfig};
pub use observer::{Encoding, EncodingObserver, Observer, ObserverId, Subject, SubjectView};
pub use sink::{Sink, Stdout};
