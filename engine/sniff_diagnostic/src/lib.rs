//! Diagnostic collection and reporting.
//!
//! - [`Diagnostic`] and [`Severity`]: what a rule module reports
//! - [`DiagnosticCollector`]: per-pass acceptance (severity overrides,
//!   inline suppression, `(position, code)` dedup), metrics and counts
//! - [`Suppressions`]: the `phpcs:disable` / `enable` / `ignore` /
//!   `ignoreFile` map of one token stream
//! - [`emitter`]: terminal and JSON output
//!
//! A collector lives for exactly one pass. Diagnostics of a pass are
//! discarded when the next pass starts; only the last pass's
//! [`DiagnosticReport`] is shown to the user.

mod collector;
mod diagnostic;
pub mod emitter;
mod suppression;

pub use collector::{
    Counts, DiagnosticCollector, DiagnosticReport, Metrics, SeverityOverride, SeverityOverrides,
};
pub use diagnostic::{format_message, Diagnostic, Severity};
pub use suppression::{code_matches, Suppressions};
