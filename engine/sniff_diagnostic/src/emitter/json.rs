//! JSON Emitter
//!
//! Machine-readable output:
//!
//! ```text
//! {
//!   "files": [
//!     {"path": "a.php", "messages": [
//!       {"line": 3, "column": 1, "severity": "error", "code": "...", "message": "...", "fixable": true}
//!     ]}
//!   ],
//!   "totals": {"errors": 1, "warnings": 0, "fixable": 1, "files": 1}
//! }
//! ```

use std::io::Write;

use crate::{Counts, Diagnostic};

use super::{escape_json, leading_comma, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    files: usize,
    messages: usize,
    started: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            files: 0,
            messages: 0,
            started: false,
        }
    }

    fn start(&mut self) {
        if !self.started {
            self.started = true;
            let _ = write!(self.writer, "{{\n  \"files\": [");
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn begin_file(&mut self, path: &str) {
        self.start();
        let comma = leading_comma(self.files);
        self.files += 1;
        self.messages = 0;
        let _ = write!(
            self.writer,
            "{comma}\n    {{\"path\": \"{}\", \"messages\": [",
            escape_json(path)
        );
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        let comma = leading_comma(self.messages);
        self.messages += 1;
        // Build JSON manually (the shape is flat and fixed)
        let _ = write!(
            self.writer,
            "{comma}\n      {{\"line\": {}, \"column\": {}, \"severity\": \"{}\", \"code\": \"{}\", \"message\": \"{}\", \"fixable\": {}}}",
            diagnostic.line,
            diagnostic.column,
            diagnostic.severity,
            escape_json(&diagnostic.code),
            escape_json(&diagnostic.message),
            diagnostic.fixable
        );
    }

    fn end_file(&mut self) {
        if self.messages == 0 {
            let _ = write!(self.writer, "]}}");
        } else {
            let _ = write!(self.writer, "\n    ]}}");
        }
    }

    fn emit_summary(&mut self, counts: &Counts, files: usize) {
        self.start();
        if self.files > 0 {
            let _ = writeln!(self.writer);
            let _ = write!(self.writer, "  ");
        }
        let _ = writeln!(self.writer, "],");
        let _ = writeln!(
            self.writer,
            "  \"totals\": {{\"errors\": {}, \"warnings\": {}, \"fixable\": {}, \"files\": {files}}}",
            counts.errors, counts.warnings, counts.fixable
        );
        let _ = writeln!(self.writer, "}}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
