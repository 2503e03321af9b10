//! Bitset of token kinds with const construction.

use super::TokenKind;

const _: () = assert!(
    TokenKind::ALL.len() <= 256,
    "TokenSet uses a 256-bit bitset; all kind indices must be < 256"
);

/// A set of token kinds using a bitset for O(1) membership testing.
///
/// Built in const context so rule modules can declare their kind sets as
/// `const` items:
///
/// ```
/// use sniff_ir::{TokenKind, TokenSet};
///
/// const OBJECTS: TokenSet = TokenSet::new()
///     .with(TokenKind::Class)
///     .with(TokenKind::Trait);
///
/// assert!(OBJECTS.contains(TokenKind::Class));
/// assert!(!OBJECTS.contains(TokenKind::Function));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TokenSet([u64; 4]);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self([0; 4])
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self::new().with(kind)
    }

    /// Build a set from a slice of kinds.
    pub const fn from_kinds(kinds: &[TokenKind]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    /// Add a kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let idx = kind.index();
        let mut words = self.0;
        words[idx / 64] |= 1u64 << (idx % 64);
        Self(words)
    }

    /// Remove a kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn without(self, kind: TokenKind) -> Self {
        let idx = kind.index();
        let mut words = self.0;
        words[idx / 64] &= !(1u64 << (idx % 64));
        Self(words)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let idx = kind.index();
        self.0[idx / 64] & (1u64 << (idx % 64)) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0 && self.0[3] == 0
    }

    pub fn insert(&mut self, kind: TokenKind) {
        *self = self.with(kind);
    }

    /// Kinds in this set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL.iter().copied().filter(|k| self.contains(*k))
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl FromIterator<TokenKind> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl From<TokenKind> for TokenSet {
    fn from(kind: TokenKind) -> Self {
        TokenSet::single(kind)
    }
}

// ─── Common Sets ───────────────────────────────────────────────

/// Tokens that carry no code: whitespace, comments, doc-comment parts and
/// suppression directives.
pub const EMPTY_TOKENS: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Whitespace,
    TokenKind::Comment,
    TokenKind::DocCommentOpenTag,
    TokenKind::DocCommentWhitespace,
    TokenKind::DocCommentStar,
    TokenKind::DocCommentString,
    TokenKind::DocCommentTag,
    TokenKind::DocCommentCloseTag,
    TokenKind::PhpcsDisable,
    TokenKind::PhpcsEnable,
    TokenKind::PhpcsIgnore,
    TokenKind::PhpcsIgnoreFile,
]);

/// Comment tokens, including suppression directives.
pub const COMMENT_TOKENS: TokenSet = EMPTY_TOKENS.without(TokenKind::Whitespace);

/// Suppression directive tokens.
pub const PHPCS_DIRECTIVES: TokenSet = TokenSet::from_kinds(&[
    TokenKind::PhpcsDisable,
    TokenKind::PhpcsEnable,
    TokenKind::PhpcsIgnore,
    TokenKind::PhpcsIgnoreFile,
]);

/// Keywords whose body is a `{ ... }` scope.
pub const SCOPE_OWNERS: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Class,
    TokenKind::Interface,
    TokenKind::Trait,
    TokenKind::Enum,
    TokenKind::Function,
    TokenKind::Declare,
    TokenKind::Namespace,
    TokenKind::If,
    TokenKind::Elseif,
    TokenKind::Else,
    TokenKind::While,
    TokenKind::Do,
    TokenKind::For,
    TokenKind::Foreach,
    TokenKind::Switch,
    TokenKind::Try,
    TokenKind::Catch,
    TokenKind::Finally,
    TokenKind::Match,
]);

/// Class-like declarations.
pub const OO_SCOPES: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Class,
    TokenKind::Interface,
    TokenKind::Trait,
    TokenKind::Enum,
]);

/// Tokens that end a statement for [`find_end_of_statement`].
///
/// [`find_end_of_statement`]: crate::TokenStore::find_end_of_statement
pub const STATEMENT_END: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Colon,
    TokenKind::Comma,
    TokenKind::DoubleArrow,
    TokenKind::Semicolon,
    TokenKind::CloseParenthesis,
    TokenKind::CloseSquareBracket,
    TokenKind::CloseCurlyBracket,
    TokenKind::OpenTag,
    TokenKind::CloseTag,
]);

/// Name parts: identifiers and namespace separators.
pub const NAME_TOKENS: TokenSet = TokenSet::from_kinds(&[TokenKind::String, TokenKind::NsSeparator]);
