//! What a rule module sees during one invocation.

use sniff_diagnostic::{DiagnosticCollector, Severity, Suppressions};
use sniff_fixer::{Edit, Fixer};
use sniff_ir::{Token, TokenStore};

use crate::SniffError;

/// Store, diagnostics and fixer for one rule-module invocation.
///
/// Diagnostic codes passed to the `add_*` methods are the final segment
/// only; the context prefixes the module's own code.
pub struct SniffContext<'a, 's> {
    store: &'s TokenStore,
    path: &'a str,
    sniff: &'static str,
    collector: &'a mut DiagnosticCollector<'s>,
    fixer: Option<&'a mut Fixer<'s>>,
}

impl<'a, 's> SniffContext<'a, 's> {
    /// Build a context. `fixer` is `None` when fixing is disabled.
    pub fn new(
        store: &'s TokenStore,
        path: &'a str,
        sniff: &'static str,
        collector: &'a mut DiagnosticCollector<'s>,
        fixer: Option<&'a mut Fixer<'s>>,
    ) -> Self {
        SniffContext {
            store,
            path,
            sniff,
            collector,
            fixer,
        }
    }

    #[inline]
    pub fn store(&self) -> &'s TokenStore {
        self.store
    }

    #[inline]
    pub fn token(&self, position: usize) -> Result<&'s Token, SniffError> {
        Ok(self.store.token(position)?)
    }

    /// Path of the file as given on the command line.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Code of the module this context belongs to.
    pub fn sniff(&self) -> &'static str {
        self.sniff
    }

    /// The file's line ending.
    pub fn eol(&self) -> &'static str {
        self.store.eol()
    }

    pub fn suppressions(&self) -> &Suppressions {
        self.collector.suppressions()
    }

    pub fn is_fixing(&self) -> bool {
        self.fixer.is_some()
    }

    // ─── Diagnostics ───────────────────────────────────────────

    pub fn add_error(
        &mut self,
        message: &str,
        position: usize,
        code: &str,
        args: &[&str],
    ) -> Result<bool, SniffError> {
        self.report(Severity::Error, message, position, code, args, false)
    }

    pub fn add_warning(
        &mut self,
        message: &str,
        position: usize,
        code: &str,
        args: &[&str],
    ) -> Result<bool, SniffError> {
        self.report(Severity::Warning, message, position, code, args, false)
    }

    /// Report a fixable error. Returns `true` when the caller should stage
    /// the fix: the report was accepted and fixing is enabled.
    pub fn add_fixable_error(
        &mut self,
        message: &str,
        position: usize,
        code: &str,
        args: &[&str],
    ) -> Result<bool, SniffError> {
        let accepted = self.report(Severity::Error, message, position, code, args, true)?;
        Ok(accepted && self.is_fixing())
    }

    /// Warning counterpart of [`add_fixable_error`](Self::add_fixable_error).
    pub fn add_fixable_warning(
        &mut self,
        message: &str,
        position: usize,
        code: &str,
        args: &[&str],
    ) -> Result<bool, SniffError> {
        let accepted = self.report(Severity::Warning, message, position, code, args, true)?;
        Ok(accepted && self.is_fixing())
    }

    pub fn record_metric(
        &mut self,
        position: usize,
        name: &str,
        value: &str,
    ) -> Result<(), SniffError> {
        Ok(self.collector.record_metric(position, name, value)?)
    }

    fn report(
        &mut self,
        severity: Severity,
        message: &str,
        position: usize,
        code: &str,
        args: &[&str],
        fixable: bool,
    ) -> Result<bool, SniffError> {
        let code = format!("{}.{code}", self.sniff);
        Ok(self
            .collector
            .report(severity, &code, position, message, args, fixable)?)
    }

    // ─── Fixes ─────────────────────────────────────────────────

    pub fn begin_changeset(&mut self) -> Result<(), SniffError> {
        let sniff = self.sniff;
        self.fixer_for("begin_changeset")?.begin_changeset(sniff)?;
        Ok(())
    }

    /// Close the open changeset. Returns `false` when it lost a conflict
    /// and was discarded.
    pub fn end_changeset(&mut self) -> Result<bool, SniffError> {
        let sniff = self.sniff;
        Ok(self.fixer_for("end_changeset")?.end_changeset(sniff)?)
    }

    pub fn rollback_changeset(&mut self) -> Result<(), SniffError> {
        let sniff = self.sniff;
        self.fixer_for("rollback_changeset")?
            .rollback_changeset(sniff)?;
        Ok(())
    }

    pub fn replace_token(&mut self, position: usize, text: &str) -> Result<(), SniffError> {
        self.stage(Edit::Replace {
            position,
            text: text.to_owned(),
        })
    }

    /// Append text to a token.
    pub fn add_content(&mut self, position: usize, text: &str) -> Result<(), SniffError> {
        self.stage(Edit::InsertAfter {
            position,
            text: text.to_owned(),
        })
    }

    /// Prepend text to a token.
    pub fn add_content_before(&mut self, position: usize, text: &str) -> Result<(), SniffError> {
        self.stage(Edit::InsertBefore {
            position,
            text: text.to_owned(),
        })
    }

    /// Append the file's line ending to a token.
    pub fn add_newline(&mut self, position: usize) -> Result<(), SniffError> {
        let eol = self.eol();
        self.add_content(position, eol)
    }

    /// Prepend the file's line ending to a token.
    pub fn add_newline_before(&mut self, position: usize) -> Result<(), SniffError> {
        let eol = self.eol();
        self.add_content_before(position, eol)
    }

    pub fn delete(&mut self, position: usize) -> Result<(), SniffError> {
        self.stage(Edit::Delete { position })
    }

    fn stage(&mut self, edit: Edit) -> Result<(), SniffError> {
        let sniff = self.sniff;
        self.fixer_for(edit.operation())?.stage(sniff, edit)?;
        Ok(())
    }

    fn fixer_for(&mut self, operation: &'static str) -> Result<&mut Fixer<'s>, SniffError> {
        self.fixer
            .as_deref_mut()
            .ok_or(SniffError::FixingDisabled { operation })
    }
}
