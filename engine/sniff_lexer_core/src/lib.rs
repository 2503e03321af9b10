//! Low-level PHP scanner.
//!
//! Turns source text into a flat sequence of `(RawTag, len)` pairs without
//! allocating per token, resolving keywords, or building scope information.
//! Those steps belong to the cooking layer in `sniff_lexer`.
//!
//! # Architecture
//!
//! ```text
//! &str ──► SourceBuffer ──► Cursor ──► RawScanner ──► RawToken { tag, len }
//! ```
//!
//! The scanner never fails. Malformed input (unterminated comments, strings
//! or heredocs, stray bytes) is encoded in the tag stream, and the sum of all
//! token lengths always equals the source length.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{initial_mode, RawScanner, ScanMode};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
