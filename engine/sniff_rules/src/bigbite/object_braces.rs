//! `BigBite.Objects.NewLineAfterOpeningBrace` and
//! `BigBite.Objects.NewLineBeforeClosingBrace`
//!
//! A class-like body opens and closes with exactly one blank line:
//!
//! ```text
//! class Foo {
//!
//!     public $bar;
//!
//! }
//! ```
//!
//! Bodies that fit on one or two lines are left to other rules.

use sniff_ir::{TokenKind, TokenSet, TokenStore, OO_SCOPES};

use crate::{Processed, Sniff, SniffContext, SniffError};

/// Braces of a class-like body spanning three or more lines.
fn body(store: &TokenStore, owner: usize) -> Result<Option<(usize, usize)>, SniffError> {
    let token = store.token(owner)?;
    let (Some(opener), Some(closer)) = (token.links.scope_opener, token.links.scope_closer)
    else {
        return Ok(None);
    };
    if store.kind(closer)? != TokenKind::CloseCurlyBracket {
        return Ok(None);
    }
    if store.token(closer)?.line <= store.token(opener)?.line + 1 {
        return Ok(None);
    }
    Ok(Some((opener, closer)))
}

/// Whole blank lines among `start..end`, after the line `after_line`.
fn blank_lines(store: &TokenStore, start: usize, end: usize, after_line: u32) -> Vec<usize> {
    (start..end)
        .filter(|&i| {
            let token = &store.tokens()[i];
            token.kind == TokenKind::Whitespace
                && token.line > after_line
                && token.column == 1
                && token.content.ends_with(['\n', '\r'])
        })
        .collect()
}

/// Requires one blank line after the opening brace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewLineAfterOpeningBrace;

impl NewLineAfterOpeningBrace {
    pub const CODE: &'static str = "BigBite.Objects.NewLineAfterOpeningBrace";
}

impl Sniff for NewLineAfterOpeningBrace {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> TokenSet {
        OO_SCOPES
    }

    fn description(&self) -> &'static str {
        "There must be exactly one blank line between the opening brace of a class, \
         interface, trait or enum and its first content."
    }

    fn codes(&self) -> &'static [&'static str] {
        &["NotFound"]
    }

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        position: usize,
    ) -> Result<Processed, SniffError> {
        let store = ctx.store();
        let Some((opener, _)) = body(store, position)? else {
            return Ok(Processed::Continue);
        };
        let Some(content) = store.find_next(TokenKind::Whitespace, opener + 1, None, true)? else {
            return Ok(Processed::Continue);
        };
        let opener_line = ctx.token(opener)?.line;
        let content_line = ctx.token(content)?.line;
        if content_line == opener_line + 2 {
            return Ok(Processed::Continue);
        }

        let keyword = ctx.token(position)?.content.as_str();
        if ctx.add_fixable_error(
            "There must be exactly one blank line between the %s definition and its first content.",
            position,
            "NotFound",
            &[keyword],
        )? {
            ctx.begin_changeset()?;
            if content_line < opener_line + 2 {
                ctx.add_newline(opener)?;
            } else {
                for extra in blank_lines(store, opener + 1, content, opener_line)
                    .into_iter()
                    .skip(1)
                {
                    ctx.replace_token(extra, "")?;
                }
            }
            ctx.end_changeset()?;
        }
        Ok(Processed::Continue)
    }
}

/// Requires one blank line before the closing brace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NewLineBeforeClosingBrace;

impl NewLineBeforeClosingBrace {
    pub const CODE: &'static str = "BigBite.Objects.NewLineBeforeClosingBrace";
}

impl Sniff for NewLineBeforeClosingBrace {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> TokenSet {
        OO_SCOPES
    }

    fn description(&self) -> &'static str {
        "There must be exactly one blank line between the last content of a class, \
         interface, trait or enum and its closing brace."
    }

    fn codes(&self) -> &'static [&'static str] {
        &["NotFound"]
    }

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        position: usize,
    ) -> Result<Processed, SniffError> {
        let store = ctx.store();
        let Some((_, closer)) = body(store, position)? else {
            return Ok(Processed::Continue);
        };
        let Some(content) = store.find_previous(TokenKind::Whitespace, closer - 1, None, true)?
        else {
            return Ok(Processed::Continue);
        };
        let closer_token = ctx.token(closer)?;
        let content_line = ctx.token(content)?.line;
        if content_line + 2 == closer_token.line {
            return Ok(Processed::Continue);
        }

        let keyword = ctx.token(position)?.content.as_str();
        if ctx.add_fixable_error(
            "There must be exactly one blank line between the body of a %s and its closing brace.",
            closer,
            "NotFound",
            &[keyword],
        )? {
            ctx.begin_changeset()?;
            if content_line + 2 > closer_token.line {
                // Keep the brace's indentation on its own line.
                let indent = closer - 1;
                let target = if indent > content
                    && store.tokens()[indent].line == closer_token.line
                {
                    indent
                } else {
                    closer
                };
                ctx.add_newline_before(target)?;
            } else {
                for extra in blank_lines(store, content + 1, closer, content_line)
                    .into_iter()
                    .skip(1)
                {
                    ctx.replace_token(extra, "")?;
                }
            }
            ctx.end_changeset()?;
        }
        Ok(Processed::Continue)
    }
}
