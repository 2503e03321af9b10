//! Cooked tokens.
//!
//! A [`Token`] is one lexical unit of a tokenization pass: its kind, exact
//! source text, location and the scope links the tokenizer resolved. Tokens
//! are owned by a [`TokenStore`](crate::TokenStore) and addressed by their
//! index in it.

mod kind;
mod set;

pub use kind::TokenKind;
pub use set::{
    TokenSet, COMMENT_TOKENS, EMPTY_TOKENS, NAME_TOKENS, OO_SCOPES, PHPCS_DIRECTIVES,
    SCOPE_OWNERS, STATEMENT_END,
};

use std::fmt;

use smallvec::SmallVec;

use crate::Span;

/// Scope and pairing links resolved by the tokenizer.
///
/// All links are token positions in the same store. An opener whose closer
/// never appears is linked to the trailing `Eof` token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Links {
    /// `[`/`]` and `{`/`}` pairs.
    pub bracket_opener: Option<usize>,
    pub bracket_closer: Option<usize>,
    /// `(`/`)` pairs.
    pub parenthesis_opener: Option<usize>,
    pub parenthesis_closer: Option<usize>,
    /// Keyword owning a parenthesised group (`if (`, `declare (`, `function f(`).
    pub parenthesis_owner: Option<usize>,
    /// For scope owners and their braces: the body braces and the owner.
    pub scope_opener: Option<usize>,
    pub scope_closer: Option<usize>,
    pub scope_condition: Option<usize>,
    /// For `DocCommentOpenTag`: the matching `DocCommentCloseTag`.
    pub comment_closer: Option<usize>,
    /// For `DocCommentCloseTag`: the matching `DocCommentOpenTag`.
    pub comment_opener: Option<usize>,
}

/// Payload of a suppression directive token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directive {
    /// Codes listed after the directive; empty means "all codes".
    pub codes: SmallVec<[String; 2]>,
}

/// A cooked token.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text. Empty for zero-width markers.
    pub content: String,
    /// Byte range of `content` in the source.
    pub span: Span,
    /// 1-based line of the first byte.
    pub line: u32,
    /// 1-based column of the first byte, tab-expanded.
    pub column: u32,
    /// Display width of `content` up to its first line break, tab-expanded.
    pub length: u32,
    /// Bracket nesting depth at this token.
    pub level: u32,
    pub links: Links,
    /// Present on `Phpcs*` directive tokens.
    pub directive: Option<Box<Directive>>,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            content: content.into(),
            span,
            line: 1,
            column: 1,
            length: 0,
            level: 0,
            links: Links::default(),
            directive: None,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_in(&self, set: TokenSet) -> bool {
        set.contains(self.kind)
    }

    /// Whether this token carries no code (whitespace or comment).
    #[inline]
    pub fn is_empty_token(&self) -> bool {
        EMPTY_TOKENS.contains(self.kind)
    }

    /// Codes listed on a suppression directive, if this is one.
    pub fn directive_codes(&self) -> Option<&[String]> {
        self.directive.as_deref().map(|d| d.codes.as_slice())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @ {}:{}",
            self.kind, self.content, self.line, self.column
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}

#[cfg(test)]
mod tests;
