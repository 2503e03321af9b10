//! Rendering run outcomes through the diagnostic emitters.

use std::fmt;
use std::str::FromStr;

use sniff_diagnostic::emitter::DiagnosticEmitter;
use sniff_diagnostic::Counts;

use crate::runner::FileOutcome;

/// Output format chosen with `--report`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per diagnostic and a summary.
    #[default]
    Full,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(ReportFormat::Full),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}' (expected full or json)")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Full => "full",
            ReportFormat::Json => "json",
        })
    }
}

/// Emit every file's diagnostics and the combined summary.
///
/// Returns the combined counts.
pub fn emit_outcomes(emitter: &mut dyn DiagnosticEmitter, outcomes: &[FileOutcome]) -> Counts {
    let mut totals = Counts::default();
    for outcome in outcomes {
        emitter.begin_file(&outcome.path);
        emitter.emit_all(&outcome.report.diagnostics);
        emitter.end_file();
        totals.merge(&outcome.report.counts);
    }
    emitter.emit_summary(&totals, outcomes.len());
    emitter.flush();
    totals
}
