//! Diagnostic Emitters
//!
//! Provides different output formats for diagnostics:
//! - Terminal: one line per diagnostic, optionally colored
//! - JSON: machine-readable output for tooling
//!
//! Output is grouped by file: `begin_file`, any number of `emit` calls,
//! `end_file`, and finally one `emit_summary`.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write;

use crate::{Counts, Diagnostic};

/// Returns a leading comma for every list element after the first.
pub(crate) fn leading_comma(index: usize) -> &'static str {
    if index == 0 {
        ""
    } else {
        ","
    }
}

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Start the diagnostics of one file.
    fn begin_file(&mut self, path: &str);

    /// Emit a single diagnostic of the current file.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Close the current file.
    fn end_file(&mut self);

    /// Emit totals over `files` files. Always the last call.
    fn emit_summary(&mut self, counts: &Counts, files: usize);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}
