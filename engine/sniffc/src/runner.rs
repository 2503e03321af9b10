//! Multi-pass runner.
//!
//! One file is processed as a sequence of passes:
//!
//! ```text
//! tokenize ─► rule modules ─► (fixing) apply_all ─► applied > 0 ? ─► next pass
//!                                                        │
//!                                                        └─► fixed point: done
//! ```
//!
//! Each pass builds a fresh token store from the current text. When fixing,
//! passes repeat until one applies nothing or `max_passes` have applied
//! something; in the latter case one more pass runs without fixing so the
//! remaining diagnostics are still reported. Cancellation is checked before
//! every pass. Files are independent and run in parallel.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use sniff_diagnostic::{DiagnosticCollector, DiagnosticReport, SeverityOverrides};
use sniff_fixer::{FixError, Fixer};
use sniff_lexer::{tokenize, LexConfig};
use sniff_rules::{ProcessError, SniffRegistry};
use tracing::{debug, debug_span, warn};

use crate::config::DEFAULT_MAX_PASSES;

/// Failure to process one file.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Sniff {
        path: String,
        #[source]
        source: ProcessError,
    },

    #[error("{path}: {source}")]
    Fix {
        path: String,
        #[source]
        source: FixError,
    },

    #[error("{path}: cancelled")]
    Cancelled { path: String },
}

/// How the runner treats each file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub tab_width: u32,
    /// Ceiling on passes that apply fixes.
    pub max_passes: usize,
    pub fix: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            tab_width: 4,
            max_passes: DEFAULT_MAX_PASSES,
            fix: false,
        }
    }
}

/// Result of processing one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: String,
    /// Final text; the input unchanged when not fixing.
    pub text: String,
    /// Whether `text` differs from the input.
    pub changed: bool,
    /// Diagnostics of the last pass.
    pub report: DiagnosticReport,
    /// Passes that applied at least one changeset.
    pub passes: usize,
    /// Changesets applied over all passes.
    pub fixes_applied: usize,
    /// False when fixing stopped at the pass limit.
    pub converged: bool,
}

impl FileOutcome {
    pub fn has_errors(&self) -> bool {
        self.report.counts.errors > 0
    }
}

/// Runs a registry of rule modules over files.
pub struct Runner {
    registry: SniffRegistry,
    overrides: SeverityOverrides,
    options: RunOptions,
    cancel: Arc<AtomicBool>,
}

impl Runner {
    pub fn new(registry: SniffRegistry, overrides: SeverityOverrides, options: RunOptions) -> Self {
        Runner {
            registry,
            overrides,
            options,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share a cancellation flag with the host.
    #[must_use]
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    pub fn registry(&self) -> &SniffRegistry {
        &self.registry
    }

    fn check_cancelled(&self, path: &str) -> Result<(), RunError> {
        if self.cancel.load(Ordering::Relaxed) {
            return Err(RunError::Cancelled {
                path: path.to_owned(),
            });
        }
        Ok(())
    }

    /// Process one file's text.
    pub fn run(&self, source: &str, path: &str) -> Result<FileOutcome, RunError> {
        let _span = debug_span!("file", path).entered();
        let lex = LexConfig {
            tab_width: self.options.tab_width,
        };

        if !self.options.fix {
            self.check_cancelled(path)?;
            let report = self.check_pass(source, path, &lex)?;
            return Ok(FileOutcome {
                path: path.to_owned(),
                text: source.to_owned(),
                changed: false,
                report,
                passes: 0,
                fixes_applied: 0,
                converged: true,
            });
        }

        let mut text = source.to_owned();
        let mut fixes_applied = 0;
        for pass in 1..=self.options.max_passes {
            self.check_cancelled(path)?;
            let _span = debug_span!("pass", pass).entered();
            let (report, next, applied) = self.fix_pass(&text, path, &lex)?;
            debug!(applied, diagnostics = report.diagnostics.len(), "pass done");
            if applied == 0 {
                return Ok(FileOutcome {
                    path: path.to_owned(),
                    changed: text != source,
                    text,
                    report,
                    passes: pass - 1,
                    fixes_applied,
                    converged: true,
                });
            }
            fixes_applied += applied;
            text = next;
        }

        self.check_cancelled(path)?;
        let report = self.check_pass(&text, path, &lex)?;
        warn!(
            path,
            max_passes = self.options.max_passes,
            remaining = report.diagnostics.len(),
            "fixes did not converge within the pass limit"
        );
        Ok(FileOutcome {
            path: path.to_owned(),
            changed: text != source,
            text,
            report,
            passes: self.options.max_passes,
            fixes_applied,
            converged: false,
        })
    }

    fn check_pass(
        &self,
        text: &str,
        path: &str,
        lex: &LexConfig,
    ) -> Result<DiagnosticReport, RunError> {
        let store = tokenize(text, lex);
        let mut collector = DiagnosticCollector::new(&store, &self.overrides);
        self.registry
            .process(&store, path, &mut collector, None)
            .map_err(|source| RunError::Sniff {
                path: path.to_owned(),
                source,
            })?;
        Ok(collector.finish())
    }

    /// One fixing pass: the report, the new text and the applied count.
    fn fix_pass(
        &self,
        text: &str,
        path: &str,
        lex: &LexConfig,
    ) -> Result<(DiagnosticReport, String, usize), RunError> {
        let store = tokenize(text, lex);
        let mut collector = DiagnosticCollector::new(&store, &self.overrides);
        let mut fixer = Fixer::new(&store);
        self.registry
            .process(&store, path, &mut collector, Some(&mut fixer))
            .map_err(|source| RunError::Sniff {
                path: path.to_owned(),
                source,
            })?;
        let outcome = fixer.apply_all().map_err(|source| RunError::Fix {
            path: path.to_owned(),
            source,
        })?;
        if outcome.discarded > 0 {
            debug!(discarded = outcome.discarded, "changesets left for the next pass");
        }
        Ok((collector.finish(), outcome.text, outcome.applied))
    }

    /// Read and process one file from disk.
    pub fn run_file(&self, path: &Path) -> Result<FileOutcome, RunError> {
        let source = std::fs::read_to_string(path).map_err(|source| RunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.run(&source, &path.display().to_string())
    }

    /// Process files in parallel. Results keep the order of `paths`.
    pub fn run_files(&self, paths: &[PathBuf]) -> Vec<Result<FileOutcome, RunError>> {
        paths.par_iter().map(|path| self.run_file(path)).collect()
    }
}
