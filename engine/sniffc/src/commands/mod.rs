//! Command handlers for the `sniff` CLI.
//!
//! Each handler returns the process exit status; `main` only dispatches.

use std::io::IsTerminal;
use std::path::Path;

use sniff_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};

use crate::config::{ConfigError, Ruleset};
use crate::discovery::discover;
use crate::report::{emit_outcomes, ReportFormat};
use crate::runner::{FileOutcome, RunOptions, Runner};

mod args;
mod check;
mod explain;
mod lex;

pub use args::{CliOptions, UsageError};
pub use check::{check_files, fix_files};
pub use explain::explain_sniff;
pub use lex::lex_file;

/// Ruleset looked up in the working directory when `--config` is absent.
pub const DEFAULT_RULESET: &str = "sniff.json";

/// Process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No diagnostics, or warnings only.
    Clean,
    /// Errors remain.
    Errors,
    /// Usage, I/O or internal failure.
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Errors => 1,
            ExitStatus::Failure => 2,
        }
    }
}

fn load_ruleset(options: &CliOptions) -> Result<Ruleset, ConfigError> {
    match &options.config {
        Some(path) => Ruleset::read(path),
        None => Ruleset::load(Path::new(DEFAULT_RULESET)),
    }
}

/// Build a runner from the ruleset and command-line overrides.
fn build_runner(options: &CliOptions, fix: bool) -> Result<Runner, ConfigError> {
    let ruleset = load_ruleset(options)?;
    let registry = ruleset.registry()?;
    let run_options = RunOptions {
        tab_width: options.tab_width.unwrap_or(ruleset.tab_width),
        max_passes: options.max_passes.unwrap_or(ruleset.max_passes),
        fix,
    };
    Ok(Runner::new(registry, ruleset.overrides(), run_options))
}

/// Run every discovered file, report the outcomes and pick the exit status.
///
/// Files that fail are reported on stderr and do not stop the others.
fn run_and_report(
    runner: &Runner,
    options: &CliOptions,
    mut each: impl FnMut(&FileOutcome) -> bool,
) -> ExitStatus {
    let files = discover(&options.paths);
    tracing::debug!(files = files.len(), "running");
    let mut failed = false;
    let mut outcomes = Vec::with_capacity(files.len());
    for result in runner.run_files(&files) {
        match result {
            Ok(outcome) => {
                failed |= !each(&outcome);
                outcomes.push(outcome);
            }
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }

    let mut emitter: Box<dyn DiagnosticEmitter> = match options.report {
        ReportFormat::Full => {
            let is_tty = std::io::stdout().is_terminal();
            Box::new(TerminalEmitter::<std::io::Stdout>::stdout(ColorMode::Auto, is_tty))
        }
        ReportFormat::Json => Box::new(JsonEmitter::new(std::io::stdout())),
    };
    let totals = emit_outcomes(emitter.as_mut(), &outcomes);

    if failed {
        ExitStatus::Failure
    } else if totals.errors > 0 {
        ExitStatus::Errors
    } else {
        ExitStatus::Clean
    }
}
