//! Option parsing shared by `check` and `fix`.

use std::path::PathBuf;

use crate::report::ReportFormat;

/// Bad command-line usage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Options of `sniff check` and `sniff fix`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub report: ReportFormat,
    pub tab_width: Option<u32>,
    pub max_passes: Option<usize>,
    pub dry_run: bool,
}

fn number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, UsageError> {
    value
        .parse()
        .map_err(|_| UsageError(format!("{flag} expects a number, found '{value}'")))
}

impl CliOptions {
    /// Parse the arguments after the command name.
    ///
    /// `--max-passes` and `--dry-run` are accepted only when `fixing`.
    pub fn parse(args: &[String], fixing: bool) -> Result<Self, UsageError> {
        let mut options = CliOptions::default();
        for arg in args {
            if let Some(path) = arg.strip_prefix("--config=") {
                options.config = Some(PathBuf::from(path));
            } else if let Some(format) = arg.strip_prefix("--report=") {
                options.report = format.parse().map_err(UsageError)?;
            } else if let Some(width) = arg.strip_prefix("--tab-width=") {
                options.tab_width = Some(number("--tab-width", width)?);
            } else if let (true, Some(passes)) = (fixing, arg.strip_prefix("--max-passes=")) {
                let passes: usize = number("--max-passes", passes)?;
                if passes == 0 {
                    return Err(UsageError("--max-passes must be at least 1".to_owned()));
                }
                options.max_passes = Some(passes);
            } else if fixing && arg == "--dry-run" {
                options.dry_run = true;
            } else if arg.starts_with("--") {
                return Err(UsageError(format!("unknown option '{arg}'")));
            } else {
                options.paths.push(PathBuf::from(arg));
            }
        }
        if options.paths.is_empty() {
            return Err(UsageError("no files given".to_owned()));
        }
        Ok(options)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
