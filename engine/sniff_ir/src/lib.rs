//! Sniff IR: tokens and the token store.
//!
//! This crate holds the data every other engine crate agrees on:
//! - [`Span`]s into the source of one pass
//! - [`TokenKind`], [`TokenSet`] and the common kind sets
//! - [`Token`] with its position metadata and scope [`Links`]
//! - [`TokenStore`] with the search primitives rule modules query
//!
//! Nothing here tokenizes; `sniff_lexer` builds a `TokenStore` from text.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod store;
mod token;

pub use span::Span;
pub use store::{Matcher, StoreError, TokenStore};
pub use token::{
    Directive, Links, Token, TokenKind, TokenSet, COMMENT_TOKENS, EMPTY_TOKENS, NAME_TOKENS,
    OO_SCOPES, PHPCS_DIRECTIVES, SCOPE_OWNERS, STATEMENT_END,
};
