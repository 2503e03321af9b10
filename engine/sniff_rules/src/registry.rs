//! Token-kind dispatch over rule modules.
//!
//! Built once at startup: each module's registered kinds map to its index,
//! so a pass touches only the modules listening for the current token.

use rustc_hash::FxHashMap;
use sniff_diagnostic::DiagnosticCollector;
use sniff_fixer::{FixError, Fixer};
use sniff_ir::{TokenKind, TokenStore};
use tracing::trace;

use crate::{Processed, Sniff, SniffContext, SniffError};

/// A rule module failed while processing a token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{sniff} failed at token {position}: {source}")]
pub struct ProcessError {
    pub sniff: &'static str,
    pub position: usize,
    #[source]
    pub source: SniffError,
}

/// Rule modules indexed by the token kinds they listen for.
#[derive(Default)]
pub struct SniffRegistry {
    sniffs: Vec<Box<dyn Sniff>>,
    by_kind: FxHashMap<TokenKind, Vec<usize>>,
}

impl SniffRegistry {
    pub fn new() -> Self {
        SniffRegistry::default()
    }

    /// Add a module. Modules listening for the same kind run in
    /// registration order.
    pub fn register(&mut self, sniff: Box<dyn Sniff>) {
        let index = self.sniffs.len();
        for kind in sniff.register().iter() {
            self.by_kind.entry(kind).or_default().push(index);
        }
        self.sniffs.push(sniff);
    }

    pub fn get(&self, code: &str) -> Option<&dyn Sniff> {
        self.sniffs
            .iter()
            .find(|s| s.code() == code)
            .map(AsRef::as_ref)
    }

    pub fn all(&self) -> &[Box<dyn Sniff>] {
        &self.sniffs
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.sniffs.iter().map(|s| s.code()).collect()
    }

    pub fn len(&self) -> usize {
        self.sniffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sniffs.is_empty()
    }

    /// Modules listening for `kind`, in registration order.
    pub fn listeners(&self, kind: TokenKind) -> impl Iterator<Item = &dyn Sniff> + '_ {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|&i| self.sniffs[i].as_ref())
    }

    /// Run every module over one token store.
    ///
    /// Tokens are visited in order; for each, the modules registered for
    /// its kind run in registration order. A module that returns
    /// [`Processed::Done`] is skipped for the rest of the store. A module
    /// that leaves a changeset open fails the pass.
    pub fn process<'s>(
        &self,
        store: &'s TokenStore,
        path: &str,
        collector: &mut DiagnosticCollector<'s>,
        mut fixer: Option<&mut Fixer<'s>>,
    ) -> Result<(), ProcessError> {
        let mut done = vec![false; self.sniffs.len()];
        for (position, token) in store.iter().enumerate() {
            let Some(indices) = self.by_kind.get(&token.kind) else {
                continue;
            };
            for &index in indices {
                if done[index] {
                    continue;
                }
                let sniff = self.sniffs[index].as_ref();
                let code = sniff.code();
                let mut ctx =
                    SniffContext::new(store, path, code, collector, fixer.as_deref_mut());
                let processed = sniff.process(&mut ctx, position).map_err(|source| {
                    ProcessError {
                        sniff: code,
                        position,
                        source,
                    }
                })?;
                if fixer.as_ref().is_some_and(|f| f.has_open_changeset()) {
                    return Err(ProcessError {
                        sniff: code,
                        position,
                        source: SniffError::Fix(FixError::UnclosedChangeset {
                            sniff: code.to_owned(),
                        }),
                    });
                }
                if processed == Processed::Done {
                    trace!(sniff = code, position, "done with file");
                    done[index] = true;
                }
            }
        }
        Ok(())
    }
}
