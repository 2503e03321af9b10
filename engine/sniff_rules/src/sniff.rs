//! The rule-module interface.

use sniff_fixer::FixError;
use sniff_ir::{StoreError, TokenSet};

use crate::SniffContext;

/// What the dispatcher does with a rule module after one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Processed {
    /// Keep calling this module for later tokens.
    Continue,
    /// This module is done with the file for this pass.
    Done,
}

/// A rule module.
///
/// A module registers the token kinds it listens for and is invoked once
/// per matching token, in token order. It reads the store through the
/// context, reports diagnostics, and stages fixes inside changesets.
///
/// Modules are configured at construction and hold no per-file state, so
/// one instance serves every file and every pass.
pub trait Sniff: Send + Sync {
    /// Dotted code, `Standard.Category.Name`. Diagnostic codes append a
    /// final segment to it.
    fn code(&self) -> &'static str;

    /// Token kinds this module is invoked for.
    fn register(&self) -> TokenSet;

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        position: usize,
    ) -> Result<Processed, SniffError>;

    /// One-paragraph description for `sniff explain`.
    fn description(&self) -> &'static str {
        ""
    }

    /// Final segments of the diagnostic codes this module can report.
    fn codes(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Failure inside a rule module. Always a rule-module defect.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SniffError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fix(#[from] FixError),

    #[error("{operation} called while fixing is disabled")]
    FixingDisabled { operation: &'static str },
}
