//! Rule modules for the sniff engine.
//!
//! A rule module implements [`Sniff`]: it registers the token kinds it
//! listens for and is invoked once per matching token with a
//! [`SniffContext`], through which it reads the token store, reports
//! diagnostics and stages fixes. A [`SniffRegistry`] dispatches one pass
//! over a file to every registered module.
//!
//! The BigBite standard lives in [`bigbite`] and its documentation rules in
//! [`bigbite_docs`]; [`bigbite::builtin`] builds any of them by code with
//! options from a ruleset.

pub mod bigbite;
pub mod bigbite_docs;
mod context;
pub mod naming;
mod options;
mod registry;
mod sniff;

#[cfg(test)]
mod testing;

pub use context::SniffContext;
pub use options::{OptionError, OptionValue, SniffOptions};
pub use registry::{ProcessError, SniffRegistry};
pub use sniff::{Processed, Sniff, SniffError};
