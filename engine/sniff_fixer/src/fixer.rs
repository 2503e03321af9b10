//! Transactional edit buffer over one token store.
//!
//! # Changeset lifecycle
//!
//! ```text
//! begin_changeset ──► Open ──(stage)*──► end_changeset ──► Closed ──► apply_all ──► Applied
//!                      │                       │
//!                      └── rollback ──► Discarded ◄── conflict
//! ```
//!
//! Only one changeset is open at a time. When a changeset closes, every
//! position it touches is checked against the changesets already accepted
//! in this pass: the first to close wins, and a later changeset touching
//! any of the same tokens is discarded whole. Its rule module reports the
//! violation again next pass and gets another chance then. A changeset
//! whose edits leave every token as it was closes as `Unchanged`: it is
//! neither applied nor counted as discarded.
//!
//! The store is never mutated. [`Fixer::apply_all`] builds new text from
//! the original token contents with the accepted edits substituted in.

use rustc_hash::{FxHashMap, FxHashSet};
use sniff_ir::TokenStore;
use tracing::trace;

use crate::{Edit, FixError};

/// Identifier of a changeset within one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChangesetId(u32);

impl ChangesetId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a changeset is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangesetState {
    Open,
    Closed,
    Applied,
    Discarded,
    /// Closed with edits that change no token.
    Unchanged,
}

/// Edits staged by one rule-module invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Changeset {
    pub id: ChangesetId,
    /// Code of the rule module that opened it.
    pub sniff: String,
    pub edits: Vec<Edit>,
    pub state: ChangesetState,
}

impl Changeset {
    /// Resolve the edits into final token contents.
    fn contents(&self, store: &TokenStore) -> FxHashMap<usize, String> {
        let mut contents: FxHashMap<usize, String> = FxHashMap::default();
        for edit in &self.edits {
            let position = edit.position();
            let current = match contents.get(&position) {
                Some(text) => text.as_str(),
                None => store.get(position).map_or("", |t| t.content.as_str()),
            };
            let next = edit.apply_to(current);
            contents.insert(position, next);
        }
        contents
    }
}

/// Result of applying a pass's changesets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixOutcome {
    /// The new source text.
    pub text: String,
    /// Number of changesets applied.
    pub applied: usize,
    /// Number of changesets discarded by conflicts or rollback.
    pub discarded: usize,
}

/// Collects changesets against one token store.
pub struct Fixer<'s> {
    store: &'s TokenStore,
    changesets: Vec<Changeset>,
    /// Index of the open changeset in `changesets`.
    open: Option<usize>,
    /// Final contents of tokens changed by accepted changesets.
    accepted: FxHashMap<usize, String>,
}

impl<'s> Fixer<'s> {
    pub fn new(store: &'s TokenStore) -> Self {
        Fixer {
            store,
            changesets: Vec::new(),
            open: None,
            accepted: FxHashMap::default(),
        }
    }

    pub fn store(&self) -> &'s TokenStore {
        self.store
    }

    /// Every changeset of this pass, in the order they were begun.
    pub fn changesets(&self) -> &[Changeset] {
        &self.changesets
    }

    pub fn has_open_changeset(&self) -> bool {
        self.open.is_some()
    }

    /// Open a changeset for `sniff`.
    pub fn begin_changeset(&mut self, sniff: &str) -> Result<ChangesetId, FixError> {
        if let Some(open) = self.open {
            return Err(FixError::NestedChangeset {
                sniff: sniff.to_owned(),
                open_by: self.changesets[open].sniff.clone(),
            });
        }
        let id = ChangesetId(u32::try_from(self.changesets.len()).unwrap_or(u32::MAX));
        self.open = Some(self.changesets.len());
        self.changesets.push(Changeset {
            id,
            sniff: sniff.to_owned(),
            edits: Vec::new(),
            state: ChangesetState::Open,
        });
        Ok(id)
    }

    /// Add an edit to the open changeset.
    pub fn stage(&mut self, sniff: &str, edit: Edit) -> Result<(), FixError> {
        let Some(open) = self.open else {
            return Err(FixError::NoOpenChangeset {
                sniff: sniff.to_owned(),
                operation: edit.operation(),
            });
        };
        if edit.position() >= self.store.len() {
            return Err(FixError::PositionOutOfRange {
                sniff: sniff.to_owned(),
                operation: edit.operation(),
                position: edit.position(),
                len: self.store.len(),
            });
        }
        self.changesets[open].edits.push(edit);
        Ok(())
    }

    /// Close the open changeset.
    ///
    /// Returns `false` when it conflicts with a changeset accepted earlier
    /// in this pass; it is then discarded and none of its edits apply.
    pub fn end_changeset(&mut self, sniff: &str) -> Result<bool, FixError> {
        let Some(open) = self.open.take() else {
            return Err(FixError::EndWithoutBegin {
                sniff: sniff.to_owned(),
            });
        };
        let mut contents = self.changesets[open].contents(self.store);
        contents.retain(|&p, text| self.store.get(p).is_some_and(|t| t.content != *text));
        if contents.is_empty() {
            let changeset = &mut self.changesets[open];
            changeset.state = ChangesetState::Unchanged;
            trace!(sniff = %changeset.sniff, "changeset changes nothing");
            return Ok(true);
        }
        let conflict = contents
            .keys()
            .find(|&p| self.accepted.contains_key(p))
            .copied();
        let changeset = &mut self.changesets[open];
        if let Some(position) = conflict {
            changeset.state = ChangesetState::Discarded;
            trace!(
                sniff = %changeset.sniff,
                id = changeset.id.index(),
                position,
                "changeset discarded: token already changed this pass"
            );
            return Ok(false);
        }
        changeset.state = ChangesetState::Closed;
        trace!(
            sniff = %changeset.sniff,
            id = changeset.id.index(),
            edits = changeset.edits.len(),
            "changeset accepted"
        );
        self.accepted.extend(contents);
        Ok(true)
    }

    /// Drop the open changeset without applying any of its edits.
    pub fn rollback_changeset(&mut self, sniff: &str) -> Result<(), FixError> {
        let Some(open) = self.open.take() else {
            return Err(FixError::EndWithoutBegin {
                sniff: sniff.to_owned(),
            });
        };
        self.changesets[open].state = ChangesetState::Discarded;
        trace!(sniff, "changeset rolled back");
        Ok(())
    }

    /// Content of the token at `position` with accepted edits applied.
    pub fn current_content(&self, position: usize) -> Option<&str> {
        self.accepted
            .get(&position)
            .map(String::as_str)
            .or_else(|| self.store.get(position).map(|t| t.content.as_str()))
    }

    /// Positions touched by accepted changesets.
    pub fn changed_positions(&self) -> FxHashSet<usize> {
        self.accepted.keys().copied().collect()
    }

    /// Build the new text from every accepted changeset.
    ///
    /// Fails if a changeset is still open: that is a rule-module defect.
    pub fn apply_all(mut self) -> Result<FixOutcome, FixError> {
        if let Some(open) = self.open {
            return Err(FixError::UnclosedChangeset {
                sniff: self.changesets[open].sniff.clone(),
            });
        }
        let mut applied = 0;
        let mut discarded = 0;
        for changeset in &mut self.changesets {
            match changeset.state {
                ChangesetState::Closed => {
                    changeset.state = ChangesetState::Applied;
                    applied += 1;
                }
                ChangesetState::Discarded => discarded += 1,
                ChangesetState::Open | ChangesetState::Applied | ChangesetState::Unchanged => {}
            }
        }

        let text = if self.accepted.is_empty() {
            self.store.source()
        } else {
            let capacity = self.store.tokens().last().map_or(0, |t| t.span.end as usize);
            let mut out = String::with_capacity(capacity);
            for (position, token) in self.store.iter().enumerate() {
                match self.accepted.get(&position) {
                    Some(replacement) => out.push_str(replacement),
                    None => out.push_str(&token.content),
                }
            }
            out
        };
        Ok(FixOutcome {
            text,
            applied,
            discarded,
        })
    }
}
