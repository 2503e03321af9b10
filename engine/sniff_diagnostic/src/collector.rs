//! Per-pass diagnostic collection.
//!
//! A [`DiagnosticCollector`] borrows the pass's [`TokenStore`] and decides,
//! for every report, whether it is accepted:
//!
//! 1. severity overrides may drop the code (`off`) or change its severity
//! 2. inline suppression directives may silence it
//! 3. a second report of the same `(position, code)` is a duplicate
//!
//! Accepted reports become [`Diagnostic`]s. [`finish`](DiagnosticCollector::finish)
//! hands back the diagnostics in source order with counts and metrics.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use sniff_ir::{StoreError, TokenStore};

use crate::suppression::{code_matches, Suppressions};
use crate::{format_message, Diagnostic, Severity};

/// Severity override configured for a code prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityOverride {
    Error,
    Warning,
    /// Drop matching diagnostics entirely.
    Off,
}

/// Code-prefix overrides; the longest matching prefix wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityOverrides {
    entries: Vec<(String, SeverityOverride)>,
}

impl SeverityOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, prefix: impl Into<String>, value: SeverityOverride) {
        let prefix = prefix.into();
        self.entries.retain(|(p, _)| *p != prefix);
        self.entries.push((prefix, value));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The override of the longest prefix covering `code`.
    pub fn lookup(&self, code: &str) -> Option<SeverityOverride> {
        self.entries
            .iter()
            .filter(|(prefix, _)| code_matches(prefix, code))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, value)| *value)
    }

    /// Apply the override for `code` to `severity`; `None` drops the report.
    fn resolve(&self, code: &str, severity: Severity) -> Option<Severity> {
        match self.lookup(code) {
            None => Some(severity),
            Some(SeverityOverride::Error) => Some(Severity::Error),
            Some(SeverityOverride::Warning) => Some(Severity::Warning),
            Some(SeverityOverride::Off) => None,
        }
    }
}

/// Totals for summary reporting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub errors: usize,
    pub warnings: usize,
    pub fixable: usize,
    pub by_code: BTreeMap<String, usize>,
}

impl Counts {
    fn add(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
        if diagnostic.fixable {
            self.fixable += 1;
        }
        *self.by_code.entry(diagnostic.code.clone()).or_default() += 1;
    }

    /// Fold another file's counts into these.
    pub fn merge(&mut self, other: &Counts) {
        self.errors += other.errors;
        self.warnings += other.warnings;
        self.fixable += other.fixable;
        for (code, n) in &other.by_code {
            *self.by_code.entry(code.clone()).or_default() += n;
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }
}

/// Metric name → value → number of positions that recorded it.
pub type Metrics = BTreeMap<String, BTreeMap<String, usize>>;

/// Everything a pass reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Accepted diagnostics in source order.
    pub diagnostics: Vec<Diagnostic>,
    pub counts: Counts,
    pub metrics: Metrics,
}

/// Accumulates diagnostics for one pass over one token store.
pub struct DiagnosticCollector<'s> {
    store: &'s TokenStore,
    suppressions: Suppressions,
    overrides: &'s SeverityOverrides,
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<(usize, String)>,
    metrics: Metrics,
    metric_seen: FxHashSet<(usize, String)>,
}

impl<'s> DiagnosticCollector<'s> {
    pub fn new(store: &'s TokenStore, overrides: &'s SeverityOverrides) -> Self {
        DiagnosticCollector {
            store,
            suppressions: Suppressions::from_store(store),
            overrides,
            diagnostics: Vec::new(),
            seen: FxHashSet::default(),
            metrics: Metrics::new(),
            metric_seen: FxHashSet::default(),
        }
    }

    pub fn suppressions(&self) -> &Suppressions {
        &self.suppressions
    }

    /// Report a violation. Returns whether it was accepted.
    ///
    /// `message` is a template; `args` fill its `%s` placeholders. A report
    /// is refused when its code is switched off, when a directive covers
    /// it, or when the same code was already reported at `position`.
    pub fn report(
        &mut self,
        severity: Severity,
        code: &str,
        position: usize,
        message: &str,
        args: &[&str],
        fixable: bool,
    ) -> Result<bool, StoreError> {
        let token = self.store.token(position)?;
        let Some(severity) = self.overrides.resolve(code, severity) else {
            return Ok(false);
        };
        if self.suppressions.suppresses(code, position, token.line) {
            return Ok(false);
        }
        if !self.seen.insert((position, code.to_owned())) {
            return Ok(false);
        }
        self.diagnostics.push(Diagnostic {
            severity,
            code: code.to_owned(),
            message: format_message(message, args),
            position,
            line: token.line,
            column: token.column,
            fixable,
        });
        Ok(true)
    }

    /// Record a metric value, once per `(position, name)`.
    pub fn record_metric(
        &mut self,
        position: usize,
        name: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.store.token(position)?;
        if self.metric_seen.insert((position, name.to_owned())) {
            *self
                .metrics
                .entry(name.to_owned())
                .or_default()
                .entry(value.to_owned())
                .or_default() += 1;
        }
        Ok(())
    }

    /// Diagnostics accepted so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn finish(self) -> DiagnosticReport {
        let mut diagnostics = self.diagnostics;
        diagnostics.sort_by_key(|d| (d.line, d.column, d.position));
        let mut counts = Counts::default();
        for diagnostic in &diagnostics {
            counts.add(diagnostic);
        }
        DiagnosticReport {
            diagnostics,
            counts,
            metrics: self.metrics,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
