//! Fix engine: transactional token edits.
//!
//! Rule modules stage [`Edit`]s inside changesets on a [`Fixer`] bound to
//! the token store of the current pass. After every rule module has run,
//! [`Fixer::apply_all`] produces the new source text and the number of
//! changesets applied; the caller re-tokenizes that text for the next pass.
//!
//! Misuse of the changeset protocol is a rule-module defect and surfaces as
//! a [`FixError`] naming the rule module and the operation. Conflicts between
//! changesets are not errors.

mod edit;
mod fixer;

pub use edit::Edit;
pub use fixer::{Changeset, ChangesetId, ChangesetState, FixOutcome, Fixer};

/// Changeset protocol violation by a rule module.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    #[error("{sniff}: {operation} called with no open changeset")]
    NoOpenChangeset {
        sniff: String,
        operation: &'static str,
    },

    #[error("{sniff}: begin_changeset called while a changeset opened by {open_by} is open")]
    NestedChangeset { sniff: String, open_by: String },

    #[error("{sniff}: end_changeset called without begin_changeset")]
    EndWithoutBegin { sniff: String },

    #[error("{sniff}: {operation} at token {position} is out of range (store holds {len} tokens)")]
    PositionOutOfRange {
        sniff: String,
        operation: &'static str,
        position: usize,
        len: usize,
    },

    #[error("changeset opened by {sniff} was never closed")]
    UnclosedChangeset { sniff: String },
}
