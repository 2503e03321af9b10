//! Token store for one source unit.
//!
//! The store is built once per pass by the tokenizer and is read-only from
//! then on. Every search primitive takes `&self`, so any number of rule
//! modules can query the same snapshot.
//!
//! Positions are indices into the token sequence. A position past the end is
//! a caller defect and is reported as [`StoreError::OutOfRange`] rather than
//! silently clamped.

mod declarations;
mod search;

pub use search::Matcher;

use crate::{Token, TokenKind};

/// Error raised when a rule module misuses the store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("token position {position} is out of range (store holds {len} tokens)")]
    OutOfRange { position: usize, len: usize },

    #[error("token {position} is {found}, expected one of: {expected}")]
    UnexpectedKind {
        position: usize,
        found: TokenKind,
        expected: &'static str,
    },
}

/// Token sequence of one source unit.
///
/// # Invariant
///
/// The last token is always a zero-width [`TokenKind::Eof`].
#[derive(Clone, Debug)]
pub struct TokenStore {
    tokens: Vec<Token>,
    eol: &'static str,
    tab_width: u32,
}

impl TokenStore {
    /// Wrap a token sequence produced by the tokenizer.
    ///
    /// Appends an `Eof` token if the sequence does not already end in one.
    pub fn new(mut tokens: Vec<Token>, eol: &'static str, tab_width: u32) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            let (line, column) = tokens.last().map_or((1, 1), |t| (t.line, t.column + t.length));
            let mut eof = Token::new(TokenKind::Eof, "", crate::Span::point(end));
            eof.line = line;
            eof.column = column;
            tokens.push(eof);
        }
        TokenStore {
            tokens,
            eol,
            tab_width,
        }
    }

    /// Number of tokens, including the trailing `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: a store holds at least the `Eof` token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Position of the trailing `Eof` token.
    #[inline]
    pub fn eof(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    /// The file's line ending, detected from its first line break.
    #[inline]
    pub fn eol(&self) -> &'static str {
        self.eol
    }

    #[inline]
    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// Token at `position`, or an error naming the bad position.
    #[inline]
    pub fn token(&self, position: usize) -> Result<&Token, StoreError> {
        self.tokens.get(position).ok_or(StoreError::OutOfRange {
            position,
            len: self.tokens.len(),
        })
    }

    /// Kind of the token at `position`.
    #[inline]
    pub fn kind(&self, position: usize) -> Result<TokenKind, StoreError> {
        self.token(position).map(|t| t.kind)
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Concatenated content of every token: the source text of this pass.
    pub fn source(&self) -> String {
        let capacity = self.tokens.last().map_or(0, |t| t.span.end as usize);
        let mut out = String::with_capacity(capacity);
        for token in &self.tokens {
            out.push_str(&token.content);
        }
        out
    }

    /// Content of the tokens in `start..=end`.
    pub fn content_between(&self, start: usize, end: usize) -> Result<String, StoreError> {
        self.check(start)?;
        self.check(end)?;
        Ok(self.tokens[start..=end.max(start)]
            .iter()
            .map(|t| t.content.as_str())
            .collect())
    }

    /// The `(opener, closer)` pair a token belongs to.
    ///
    /// Brackets and parentheses return their pair, scope owners return their
    /// body braces, a doc-comment open tag returns its close tag, and any
    /// other token returns `(position, position)`.
    pub fn scope_pair(&self, position: usize) -> Result<(usize, usize), StoreError> {
        let links = &self.token(position)?.links;
        let pair = if let (Some(open), Some(close)) = (links.scope_opener, links.scope_closer) {
            (open, close)
        } else if let (Some(open), Some(close)) = (links.bracket_opener, links.bracket_closer) {
            (open, close)
        } else if let (Some(open), Some(close)) =
            (links.parenthesis_opener, links.parenthesis_closer)
        {
            (open, close)
        } else if let Some(close) = links.comment_closer {
            (position, close)
        } else if let Some(open) = links.comment_opener {
            (open, position)
        } else {
            (position, position)
        };
        Ok(pair)
    }

    #[inline]
    fn check(&self, position: usize) -> Result<(), StoreError> {
        if position < self.tokens.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                position,
                len: self.tokens.len(),
            })
        }
    }
}
