//! Bidirectional search primitives.

use super::{StoreError, TokenStore};
use crate::{Token, TokenKind, TokenSet, EMPTY_TOKENS, OO_SCOPES, STATEMENT_END};

/// Predicate for [`TokenStore::find_next`] and [`TokenStore::find_previous`].
#[derive(Clone, Copy, Debug)]
pub enum Matcher<'a> {
    /// A single kind.
    Kind(TokenKind),
    /// Any kind in the set.
    Set(TokenSet),
    /// Exact content, any kind.
    Content(&'a str),
    /// A kind with exact content.
    KindContent(TokenKind, &'a str),
}

impl Matcher<'_> {
    #[inline]
    pub fn matches(&self, token: &Token) -> bool {
        match *self {
            Matcher::Kind(kind) => token.kind == kind,
            Matcher::Set(set) => set.contains(token.kind),
            Matcher::Content(text) => token.content == text,
            Matcher::KindContent(kind, text) => token.kind == kind && token.content == text,
        }
    }
}

impl From<TokenKind> for Matcher<'_> {
    fn from(kind: TokenKind) -> Self {
        Matcher::Kind(kind)
    }
}

impl From<TokenSet> for Matcher<'_> {
    fn from(set: TokenSet) -> Self {
        Matcher::Set(set)
    }
}

impl<'a> From<&'a str> for Matcher<'a> {
    fn from(text: &'a str) -> Self {
        Matcher::Content(text)
    }
}

impl TokenStore {
    /// First position in `start..end` whose token matches.
    ///
    /// With `exclude`, finds the first token that does *not* match, which
    /// is how "next non-whitespace token" is spelled. `end` defaults to the
    /// end of the store and is exclusive. A `start` equal to the store
    /// length yields `None`.
    pub fn find_next<'m>(
        &self,
        matcher: impl Into<Matcher<'m>>,
        start: usize,
        end: Option<usize>,
        exclude: bool,
    ) -> Result<Option<usize>, StoreError> {
        self.scan_forward(matcher.into(), start, end, exclude, false)
    }

    /// Like [`find_next`](Self::find_next), but gives up at the end of the
    /// current statement (the first `;`).
    pub fn find_next_local<'m>(
        &self,
        matcher: impl Into<Matcher<'m>>,
        start: usize,
        end: Option<usize>,
        exclude: bool,
    ) -> Result<Option<usize>, StoreError> {
        self.scan_forward(matcher.into(), start, end, exclude, true)
    }

    /// Last position in `end..=start` whose token matches, scanning
    /// backwards from `start`.
    ///
    /// `end` defaults to 0 and is inclusive.
    pub fn find_previous<'m>(
        &self,
        matcher: impl Into<Matcher<'m>>,
        start: usize,
        end: Option<usize>,
        exclude: bool,
    ) -> Result<Option<usize>, StoreError> {
        self.check(start)?;
        let matcher = matcher.into();
        let end = end.unwrap_or(0);
        if end > start {
            return Ok(None);
        }
        Ok((end..=start)
            .rev()
            .find(|&i| matcher.matches(&self.tokens[i]) != exclude))
    }

    /// Next token that is not whitespace or a comment, starting at `start`.
    pub fn next_non_empty(&self, start: usize) -> Result<Option<usize>, StoreError> {
        self.find_next(EMPTY_TOKENS, start, None, true)
    }

    /// Previous token that is not whitespace or a comment, starting at `start`.
    pub fn previous_non_empty(&self, start: usize) -> Result<Option<usize>, StoreError> {
        self.find_previous(EMPTY_TOKENS, start, None, true)
    }

    fn scan_forward(
        &self,
        matcher: Matcher<'_>,
        start: usize,
        end: Option<usize>,
        exclude: bool,
        local: bool,
    ) -> Result<Option<usize>, StoreError> {
        if start > self.tokens.len() {
            return Err(StoreError::OutOfRange {
                position: start,
                len: self.tokens.len(),
            });
        }
        let end = end.map_or(self.tokens.len(), |e| e.min(self.tokens.len()));
        for i in start..end {
            let token = &self.tokens[i];
            if matcher.matches(token) != exclude {
                return Ok(Some(i));
            }
            if local && token.kind == TokenKind::Semicolon {
                break;
            }
        }
        Ok(None)
    }

    // ─── Statements ────────────────────────────────────────────

    /// Position of the token that ends the statement containing `start`.
    ///
    /// Returns the terminating `;` (or `,`, `:`, `=>`), skipping nested
    /// bracket groups and scope bodies. If the statement is cut short by
    /// an enclosing closer or a PHP tag, returns the last non-empty token
    /// before it. If `start` is a scope owner, returns its body closer.
    pub fn find_end_of_statement(&self, start: usize) -> Result<usize, StoreError> {
        let first = self.token(start)?;
        if first.links.scope_condition.is_some() && first.links.scope_closer == Some(start) {
            return Ok(start);
        }

        let mut last_not_empty = start;
        let mut i = start;
        while i < self.tokens.len() {
            let token = &self.tokens[i];
            if i != start && STATEMENT_END.contains(token.kind) {
                if token.kind.is_closer()
                    || matches!(token.kind, TokenKind::OpenTag | TokenKind::CloseTag)
                {
                    return Ok(last_not_empty);
                }
                return Ok(i);
            }

            let links = &token.links;
            if let Some(closer) = links.scope_closer.filter(|_| {
                links.scope_opener == Some(i) || links.scope_condition == Some(i)
            }) {
                if i == start && links.scope_condition == Some(i) {
                    return Ok(closer);
                }
                i = closer;
            } else if let Some(closer) = links.bracket_closer.filter(|_| links.bracket_opener == Some(i))
            {
                i = closer;
            } else if let Some(closer) =
                links.parenthesis_closer.filter(|_| links.parenthesis_opener == Some(i))
            {
                i = closer;
            }

            if !EMPTY_TOKENS.contains(self.tokens[i].kind) {
                last_not_empty = i;
            }
            i += 1;
        }
        Ok(self.eof())
    }

    /// Position of the first token of the statement containing `start`.
    pub fn find_start_of_statement(&self, start: usize) -> Result<usize, StoreError> {
        let first = self.token(start)?;
        if let Some(owner) = first.links.scope_condition {
            if first.links.scope_closer == Some(start) {
                return Ok(owner);
            }
        }

        let mut last_not_empty = start;
        let mut i = start;
        loop {
            let token = &self.tokens[i];
            let links = &token.links;
            let boundary = matches!(
                token.kind,
                TokenKind::Semicolon
                    | TokenKind::Comma
                    | TokenKind::Colon
                    | TokenKind::DoubleArrow
                    | TokenKind::OpenTag
                    | TokenKind::CloseTag
            ) || token.kind.is_opener();
            if i != start && boundary {
                return Ok(last_not_empty);
            }
            if i != start && links.scope_condition.is_some() && links.scope_closer == Some(i) {
                return Ok(last_not_empty);
            }

            if let Some(opener) = links.bracket_opener.filter(|_| links.bracket_closer == Some(i)) {
                i = opener;
            } else if let Some(opener) =
                links.parenthesis_opener.filter(|_| links.parenthesis_closer == Some(i))
            {
                i = opener;
            }

            if !EMPTY_TOKENS.contains(self.tokens[i].kind) {
                last_not_empty = i;
            }
            if i == 0 {
                return Ok(last_not_empty);
            }
            i -= 1;
        }
    }

    // ─── Scopes ────────────────────────────────────────────────

    /// Owner of the innermost scope whose body contains `position` and whose
    /// owner kind is in `owners`.
    pub fn enclosing_scope(
        &self,
        position: usize,
        owners: TokenSet,
    ) -> Result<Option<usize>, StoreError> {
        self.check(position)?;
        for i in (0..position).rev() {
            let links = &self.tokens[i].links;
            if links.scope_opener != Some(i) {
                continue;
            }
            let (Some(owner), Some(closer)) = (links.scope_condition, links.scope_closer) else {
                continue;
            };
            if closer > position && owners.contains(self.tokens[owner].kind) {
                return Ok(Some(owner));
            }
        }
        Ok(None)
    }

    /// Closing brace of the innermost class-like body containing `position`.
    pub fn enclosing_class_closer(&self, position: usize) -> Result<Option<usize>, StoreError> {
        let owner = self.enclosing_scope(position, OO_SCOPES)?;
        Ok(owner.and_then(|o| self.tokens[o].links.scope_closer))
    }

    /// Whether `position` lies inside a scope owned by any kind in `owners`.
    pub fn has_condition(&self, position: usize, owners: TokenSet) -> Result<bool, StoreError> {
        Ok(self.enclosing_scope(position, owners)?.is_some())
    }
}
