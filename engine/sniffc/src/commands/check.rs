//! The `check` and `fix` commands.

use super::{build_runner, run_and_report, CliOptions, ExitStatus};

/// Report diagnostics without changing any file.
pub fn check_files(options: &CliOptions) -> ExitStatus {
    let runner = match build_runner(options, false) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitStatus::Failure;
        }
    };
    run_and_report(&runner, options, |_| true)
}

/// Fix files in place, then report what remains.
///
/// With `--dry-run` nothing is written; the files that would change are
/// listed on stderr instead.
pub fn fix_files(options: &CliOptions) -> ExitStatus {
    let runner = match build_runner(options, true) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitStatus::Failure;
        }
    };
    run_and_report(&runner, options, |outcome| {
        if !outcome.converged {
            eprintln!(
                "warning: {}: fixes did not converge after {} passes; {} problems remain",
                outcome.path,
                outcome.passes,
                outcome.report.diagnostics.len()
            );
        }
        if !outcome.changed {
            return true;
        }
        if options.dry_run {
            eprintln!(
                "{}: would apply {} fixes in {} passes",
                outcome.path, outcome.fixes_applied, outcome.passes
            );
            return true;
        }
        match std::fs::write(&outcome.path, &outcome.text) {
            Ok(()) => {
                eprintln!(
                    "{}: applied {} fixes in {} passes",
                    outcome.path, outcome.fixes_applied, outcome.passes
                );
                true
            }
            Err(e) => {
                eprintln!("error: cannot write '{}': {e}", outcome.path);
                false
            }
        }
    })
}
