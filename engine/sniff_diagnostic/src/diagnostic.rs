//! Core diagnostic types.
//!
//! Defines [`Diagnostic`] and [`Severity`], plus the `%s` message formatting
//! rule modules use for their templates.

use std::fmt;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reported violation.
///
/// Created by the collector when a report is accepted; never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Full dotted code, e.g. `BigBite.PHP.Heredoc.NotAllowed`.
    pub code: String,
    /// Message with arguments already substituted.
    pub message: String,
    /// Token position in the pass that produced the diagnostic.
    pub position: usize,
    pub line: u32,
    pub column: u32,
    /// A fix exists for this violation.
    pub fixable: bool,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.line, self.column, self.severity, self.code, self.message
        )
    }
}

/// Substitute `args` into a `printf`-style template.
///
/// `%s` and `%d` take the next argument, `%%` is a literal percent sign.
/// Placeholders beyond the supplied arguments are left as written.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(&spec @ ('s' | 'd')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(arg),
                    None => {
                        out.push('%');
                        out.push(spec);
                    }
                }
            }
            _ => out.push('%'),
        }
    }
    out
}
