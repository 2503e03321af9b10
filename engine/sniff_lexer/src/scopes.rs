//! Bracket pairing, nesting levels and scope links.
//!
//! Four passes over the cooked tokens:
//!
//! 1. **Brackets**: a stack pairs `(`/`)`, `[`/`]` (also `#[`/`]`) and
//!    `{`/`}` and records each token's nesting level. A closer that does not
//!    match the top of the stack closes the nearest matching opener and
//!    leaves the openers above it unmatched; a closer with no opener at all
//!    gets no links.
//! 2. **Parenthesis owners**: `if (`, `declare (`, `function f(` and friends.
//! 3. **Scope owners**: each scope keyword claims the `{` of its body.
//! 4. **Doc comments**: open and close tags link to each other.
//!
//! Unmatched openers are linked to the trailing `Eof`.

use sniff_ir::{Token, TokenKind, TokenSet, EMPTY_TOKENS, SCOPE_OWNERS};

/// Keywords whose parenthesised group belongs to them.
const PARENTHESIS_OWNERS: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Array,
    TokenKind::Catch,
    TokenKind::Declare,
    TokenKind::Elseif,
    TokenKind::Empty,
    TokenKind::Eval,
    TokenKind::Exit,
    TokenKind::Fn,
    TokenKind::For,
    TokenKind::Foreach,
    TokenKind::Function,
    TokenKind::If,
    TokenKind::Isset,
    TokenKind::List,
    TokenKind::Match,
    TokenKind::Switch,
    TokenKind::Unset,
    TokenKind::Use,
    TokenKind::While,
]);

/// Tokens that end the search for a scope owner's opening brace.
const SCOPE_SEARCH_STOP: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Semicolon,
    TokenKind::CloseParenthesis,
    TokenKind::CloseSquareBracket,
    TokenKind::CloseCurlyBracket,
    TokenKind::CloseTag,
    TokenKind::Eof,
]);

/// Link every pair and scope in `tokens`. The last token must be `Eof`.
pub(crate) fn link(tokens: &mut [Token]) {
    let eof = tokens.len().saturating_sub(1);
    pair_brackets(tokens, eof);
    link_parenthesis_owners(tokens);
    link_scope_owners(tokens, eof);
    link_doc_comments(tokens);
}

// ─── Brackets ──────────────────────────────────────────────

/// Closer expected for an opener on the bracket stack.
fn expected_closer(kind: TokenKind) -> Option<TokenKind> {
    match kind {
        TokenKind::Attribute => Some(TokenKind::CloseSquareBracket),
        _ => kind.matching_closer(),
    }
}

fn pair_brackets(tokens: &mut [Token], eof: usize) {
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..tokens.len() {
        let kind = tokens[i].kind;
        if expected_closer(kind).is_some() {
            tokens[i].level = depth(&stack);
            stack.push(i);
            continue;
        }
        if kind.is_closer() {
            let matched = stack
                .iter()
                .rposition(|&open| expected_closer(tokens[open].kind) == Some(kind));
            if let Some(at) = matched {
                for unmatched in stack.drain(at + 1..).collect::<Vec<_>>() {
                    set_pair(tokens, unmatched, eof);
                }
                if let Some(opener) = stack.pop() {
                    set_pair(tokens, opener, i);
                }
            }
        }
        tokens[i].level = depth(&stack);
    }
    for opener in stack {
        set_pair(tokens, opener, eof);
    }
}

fn depth(stack: &[usize]) -> u32 {
    u32::try_from(stack.len()).unwrap_or(u32::MAX)
}

/// Record an opener/closer pair on both tokens. A closer at `Eof` is only
/// recorded on the opener.
fn set_pair(tokens: &mut [Token], opener: usize, closer: usize) {
    let paren = tokens[opener].kind == TokenKind::OpenParenthesis;
    let eof = closer == tokens.len() - 1;
    for (at, both) in [(opener, true), (closer, !eof)] {
        if !both {
            continue;
        }
        let links = &mut tokens[at].links;
        if paren {
            links.parenthesis_opener = Some(opener);
            links.parenthesis_closer = Some(closer);
        } else {
            links.bracket_opener = Some(opener);
            links.bracket_closer = Some(closer);
        }
    }
}

// ─── Owners ────────────────────────────────────────────────

fn previous_non_empty(tokens: &[Token], before: usize) -> Option<usize> {
    (0..before).rev().find(|&i| !tokens[i].is_in(EMPTY_TOKENS))
}

fn next_non_empty(tokens: &[Token], after: usize) -> Option<usize> {
    (after + 1..tokens.len()).find(|&i| !tokens[i].is_in(EMPTY_TOKENS))
}

fn link_parenthesis_owners(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::OpenParenthesis {
            continue;
        }
        let Some(owner) = parenthesis_owner(tokens, i) else {
            continue;
        };
        let closer = tokens[i].links.parenthesis_closer;
        tokens[i].links.parenthesis_owner = Some(owner);
        if let Some(closer) = closer.filter(|&c| c + 1 < tokens.len()) {
            tokens[closer].links.parenthesis_owner = Some(owner);
        }
        let links = &mut tokens[owner].links;
        links.parenthesis_opener = Some(i);
        links.parenthesis_closer = closer;
    }
}

/// The keyword owning the group opened at `open`: a keyword directly before
/// it, or `function` before a function name.
fn parenthesis_owner(tokens: &[Token], open: usize) -> Option<usize> {
    let prev = previous_non_empty(tokens, open)?;
    if tokens[prev].is_in(PARENTHESIS_OWNERS) {
        return Some(prev);
    }
    if tokens[prev].kind != TokenKind::String {
        return None;
    }
    let mut before = previous_non_empty(tokens, prev)?;
    if tokens[before].kind == TokenKind::BitwiseAnd {
        before = previous_non_empty(tokens, before)?;
    }
    (tokens[before].kind == TokenKind::Function).then_some(before)
}

fn link_scope_owners(tokens: &mut [Token], eof: usize) {
    for owner in 0..tokens.len() {
        if !tokens[owner].is_in(SCOPE_OWNERS) {
            continue;
        }
        if tokens[owner].kind == TokenKind::Else
            && next_non_empty(tokens, owner).is_some_and(|n| tokens[n].kind == TokenKind::If)
        {
            continue;
        }
        let Some(opener) = find_scope_opener(tokens, owner) else {
            continue;
        };
        let Some(closer) = tokens[opener].links.bracket_closer else {
            continue;
        };
        let targets: &[usize] = if closer == eof {
            &[owner, opener]
        } else {
            &[owner, opener, closer]
        };
        for &at in targets {
            let links = &mut tokens[at].links;
            links.scope_opener = Some(opener);
            links.scope_closer = Some(closer);
            links.scope_condition = Some(owner);
        }
    }
}

/// The unclaimed `{` opening the body of the scope keyword at `owner`.
///
/// Skips parenthesised groups; gives up at `;`, a closer, or a `:` outside a
/// function signature (alternative syntax).
fn find_scope_opener(tokens: &[Token], owner: usize) -> Option<usize> {
    let is_function = tokens[owner].kind == TokenKind::Function;
    let mut i = owner + 1;
    while i < tokens.len() {
        let token = &tokens[i];
        match token.kind {
            _ if token.is_in(EMPTY_TOKENS) => {}
            TokenKind::OpenCurlyBracket => {
                return token.links.scope_condition.is_none().then_some(i);
            }
            TokenKind::OpenParenthesis => match token.links.parenthesis_closer {
                Some(closer) if closer > i => i = closer,
                _ => return None,
            },
            TokenKind::Colon if !is_function => return None,
            _ if token.is_in(SCOPE_SEARCH_STOP) => return None,
            _ => {}
        }
        i += 1;
    }
    None
}

// ─── Doc comments ──────────────────────────────────────────

fn link_doc_comments(tokens: &mut [Token]) {
    let mut open = None;
    for i in 0..tokens.len() {
        match tokens[i].kind {
            TokenKind::DocCommentOpenTag => open = Some(i),
            TokenKind::DocCommentCloseTag => {
                if let Some(opener) = open.take() {
                    tokens[opener].links.comment_closer = Some(i);
                    tokens[i].links.comment_opener = Some(opener);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests;
