//! Terminal Emitter
//!
//! Human-readable output, one line per diagnostic:
//!
//! ```text
//! src/a.php:3:1: error[BigBite.PHP.Heredoc.NotAllowed]: Use of heredoc syntax ...
//! ```

use std::io::{self, Write};

use crate::{Counts, Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const FIXABLE: &str = "\x1b[1;32m"; // Bold green
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto` mode, `is_tty` decides; it is ignored otherwise.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    path: String,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path: String::new(),
        }
    }

    /// Create a terminal emitter for stdout with explicit color mode.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stdout> {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(severity.as_str(), color);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn begin_file(&mut self, path: &str) {
        path.clone_into(&mut self.path);
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        let location = format!("{}:{}:{}", self.path, diagnostic.line, diagnostic.column);
        self.write_colored(&location, colors::BOLD);
        let _ = write!(self.writer, ": ");
        self.write_severity(diagnostic.severity);
        let _ = write!(self.writer, "[{}]: {}", diagnostic.code, diagnostic.message);
        if diagnostic.fixable {
            let _ = write!(self.writer, " ");
            self.write_colored("(fixable)", colors::FIXABLE);
        }
        let _ = writeln!(self.writer);
    }

    fn end_file(&mut self) {}

    fn emit_summary(&mut self, counts: &Counts, files: usize) {
        if counts.total() == 0 {
            let _ = writeln!(self.writer, "{files} file{} checked, no problems found", plural_s(files));
            return;
        }
        let _ = writeln!(self.writer);
        let _ = write!(
            self.writer,
            "{} error{}, {} warning{} in {files} file{}",
            counts.errors,
            plural_s(counts.errors),
            counts.warnings,
            plural_s(counts.warnings),
            plural_s(files)
        );
        if counts.fixable > 0 {
            let _ = write!(
                self.writer,
                "; {} can be fixed automatically with `sniff fix`",
                counts.fixable
            );
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
