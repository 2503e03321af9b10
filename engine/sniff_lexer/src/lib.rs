//! PHP tokenizer for the sniff engine.
//!
//! Produces a [`TokenStore`] from source text. Tokenizing never fails:
//! malformed input degrades into tokens (an unterminated comment is one
//! token to end of input, a stray byte is `T_UNKNOWN`), and concatenating
//! every token's content reproduces the source exactly.
//!
//! # Pipeline
//!
//! ```text
//! &str ─► RawScanner ─► TokenCooker ─► positions ─► scopes ─► TokenStore
//! ```
//!
//! Every stage runs again on each fixing pass, so columns and scope links
//! always describe the current text.

mod cooker;
mod directives;
mod doc_comment;
mod keywords;
mod positions;
mod scopes;

use sniff_ir::TokenStore;
use sniff_lexer_core::{initial_mode, RawScanner, RawTag, SourceBuffer};

use crate::cooker::{RawSpan, TokenCooker};

pub use sniff_lexer_core::{EncodingIssue, EncodingIssueKind};

/// Tokenizer settings that affect token metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexConfig {
    /// Columns per tab stop. 0 counts a tab as one column.
    pub tab_width: u32,
}

impl Default for LexConfig {
    fn default() -> Self {
        LexConfig { tab_width: 4 }
    }
}

/// Tokenize `source` into a store ending in a zero-width `Eof`.
pub fn tokenize(source: &str, config: &LexConfig) -> TokenStore {
    let raw = raw_spans(source);
    let mut tokens = TokenCooker::new(source, &raw).cook_all();
    positions::assign(&mut tokens, config.tab_width);
    scopes::link(&mut tokens);
    TokenStore::new(tokens, detect_eol(source), config.tab_width)
}

/// The line break used by the file: the first one found, else `"\n"`.
pub fn detect_eol(source: &str) -> &'static str {
    let bytes = source.as_bytes();
    match memchr::memchr2(b'\n', b'\r', bytes) {
        Some(at) if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') => "\r\n",
        Some(at) if bytes[at] == b'\r' => "\r",
        _ => "\n",
    }
}

/// Byte-order mark and interior null bytes in `source`.
pub fn encoding_issues(source: &str) -> Vec<EncodingIssue> {
    SourceBuffer::new(source).encoding_issues().to_vec()
}

/// Run the raw scanner to completion, recording absolute byte ranges.
fn raw_spans(source: &str) -> Vec<RawSpan> {
    let buffer = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buffer.cursor(), initial_mode(buffer.as_bytes()));
    let mut spans = Vec::with_capacity(source.len() / 4 + 1);
    let mut at = 0u32;
    loop {
        let token = scanner.next_token();
        if token.tag == RawTag::Eof {
            break;
        }
        spans.push(RawSpan {
            tag: token.tag,
            start: at,
            end: at + token.len,
        });
        at += token.len;
    }
    spans
}
