//! The sniff driver: ruleset configuration, the multi-pass runner and the
//! command handlers behind the `sniff` binary.
//!
//! ```text
//! Ruleset ──► SniffRegistry + SeverityOverrides ──► Runner ──► FileOutcome ──► emitter
//! ```

pub mod commands;
pub mod config;
pub mod discovery;
pub mod report;
pub mod runner;
mod tracing_setup;

pub use config::{ConfigError, Ruleset, SeverityLevel};
pub use runner::{FileOutcome, RunError, RunOptions, Runner};
pub use tracing_setup::init_tracing;
