//! `BigBite.Files.DeclareStatement`
//!
//! Expected layout:
//!
//! ```text
//! declare( strict_types = 1 );
//!
//! declare( ticks = 1 ) {
//!     ...
//! }
//! ```

use sniff_ir::{TokenKind, TokenSet, EMPTY_TOKENS};

use crate::{OptionError, Processed, Sniff, SniffContext, SniffError, SniffOptions};

const ON_ONE_LINE: &str = "The contents of a declare statement should be single-spaced on one line.";

/// Checks spacing, casing and brace layout of `declare` statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclareStatement {
    pub valid_directives: Vec<String>,
}

impl Default for DeclareStatement {
    fn default() -> Self {
        DeclareStatement {
            valid_directives: ["encoding", "strict_types", "ticks"]
                .map(str::to_owned)
                .to_vec(),
        }
    }
}

/// Token positions of one `declare ( name = value )` head.
#[derive(Clone, Copy, Debug)]
struct Head {
    keyword: usize,
    open: usize,
    close: usize,
    directive: Option<usize>,
    equals: Option<usize>,
}

/// How to report a single-space violation.
struct SpaceCheck {
    /// Token the "too much space" error is reported on.
    report_at: usize,
    code: &'static str,
    message: &'static str,
}

impl DeclareStatement {
    pub const CODE: &'static str = "BigBite.Files.DeclareStatement";

    pub fn from_options(options: &SniffOptions) -> Result<Self, OptionError> {
        options.expect_keys(&["validDirectives"])?;
        Ok(DeclareStatement {
            valid_directives: options
                .get_list("validDirectives", &["encoding", "strict_types", "ticks"])?,
        })
    }

    /// Whitespace between the keyword and `(`.
    fn after_keyword(&self, ctx: &mut SniffContext<'_, '_>, head: Head) -> Result<(), SniffError> {
        let store = ctx.store();
        let spaces: Vec<usize> = (head.keyword + 1..head.open)
            .filter(|&i| store.tokens()[i].kind == TokenKind::Whitespace)
            .collect();
        if spaces.is_empty() {
            return Ok(());
        }
        if ctx.add_fixable_error(
            "Expected no whitespace between declare keyword and its opening parenthesis.",
            head.keyword,
            "SpaceFoundAfterKeyword",
            &[],
        )? {
            self.fix_with(ctx, |ctx| {
                for space in spaces {
                    ctx.replace_token(space, "")?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }

    /// One space between `(` and the directive.
    fn after_open_paren(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        head: Head,
    ) -> Result<(), SniffError> {
        let next = head.open + 1;
        if ctx.token(next)?.kind == TokenKind::Whitespace {
            return self.single_space(
                ctx,
                next,
                &SpaceCheck {
                    report_at: head.open,
                    code: "TooMuchSpaceFoundBeforeDirective",
                    message: "Expected one space between opening parenthesis and directive in a declare statement; found %s.",
                },
            );
        }
        if ctx.add_fixable_error(
            "Expected one space between opening parenthesis and directive in a declare statement; found none.",
            next,
            "NoSpaceFoundBeforeDirective",
            &[],
        )? {
            self.fix_with(ctx, |ctx| ctx.add_content_before(next, " "))?;
        }
        Ok(())
    }

    /// Directive is known and lowercase.
    fn directive_name(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        head: Head,
    ) -> Result<(), SniffError> {
        let Some(directive) = head.directive else {
            return Ok(());
        };
        let found = ctx.token(directive)?.content.as_str();
        let expected = found.to_ascii_lowercase();

        // Validity takes precedence over casing.
        if !self.valid_directives.contains(&expected) {
            let valid = self.valid_directives.join(", ");
            ctx.add_error(
                "Invalid directive found in declare statement; expected one of %s; found %s.",
                directive,
                "InvalidDirective",
                &[valid.as_str(), found],
            )?;
            return Ok(());
        }
        if found == expected {
            return Ok(());
        }
        if ctx.add_fixable_error(
            "Directives in a declare statement should be lower case; expected %s; found %s.",
            directive,
            "DirectiveNotLowerCase",
            &[expected.as_str(), found],
        )? {
            self.fix_with(ctx, |ctx| ctx.replace_token(directive, &expected))?;
        }
        Ok(())
    }

    /// One space between the directive and `=`.
    fn after_directive(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        head: Head,
    ) -> Result<(), SniffError> {
        let (Some(directive), Some(_)) = (head.directive, head.equals) else {
            return Ok(());
        };
        let next = directive + 1;
        if ctx.token(next)?.kind == TokenKind::Whitespace {
            return self.single_space(
                ctx,
                next,
                &SpaceCheck {
                    report_at: next,
                    code: "TooMuchSpaceFoundAfterDirective",
                    message: "Expected one space after the directive in a declare statement; found %s.",
                },
            );
        }
        let message = if head.equals == Some(next) {
            "Expected one space between the directive and equals sign in a declare statement; found none."
        } else {
            "Expected one space after the directive in a declare statement; found none."
        };
        if ctx.add_fixable_error(message, directive, "NoSpaceFoundAfterDirective", &[])? {
            self.fix_with(ctx, |ctx| ctx.add_content(directive, " "))?;
        }
        Ok(())
    }

    /// One space before `=`.
    fn before_equals(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        head: Head,
    ) -> Result<(), SniffError> {
        let (Some(directive), Some(equals)) = (head.directive, head.equals) else {
            return Ok(());
        };
        let prev = equals - 1;
        // Missing space after the directive is reported there.
        if prev == directive {
            return Ok(());
        }
        if ctx.token(prev)?.kind == TokenKind::Whitespace {
            return self.single_space(
                ctx,
                prev,
                &SpaceCheck {
                    report_at: prev,
                    code: "TooMuchSpaceFoundBeforeEquals",
                    message: "Expected one space before the equals sign in a declare statement; found %s.",
                },
            );
        }
        if ctx.add_fixable_error(
            "Expected one space before the equals sign in a declare statement; found none.",
            equals,
            "NoSpaceFoundBeforeEquals",
            &[],
        )? {
            self.fix_with(ctx, |ctx| ctx.add_content_before(equals, " "))?;
        }
        Ok(())
    }

    /// One space after `=`.
    fn after_equals(&self, ctx: &mut SniffContext<'_, '_>, head: Head) -> Result<(), SniffError> {
        let Some(equals) = head.equals else {
            return Ok(());
        };
        let next = equals + 1;
        if ctx.token(next)?.kind == TokenKind::Whitespace {
            return self.single_space(
                ctx,
                next,
                &SpaceCheck {
                    report_at: next,
                    code: "TooMuchSpaceFoundAfterEquals",
                    message: "Expected one space after the equals sign in a declare statement; found %s.",
                },
            );
        }
        if ctx.add_fixable_error(
            "Expected one space after the equals sign in a declare statement; found none.",
            equals,
            "NoSpaceFoundAfterEquals",
            &[],
        )? {
            self.fix_with(ctx, |ctx| ctx.add_content(equals, " "))?;
        }
        Ok(())
    }

    /// The directive value: first non-whitespace token after `=`.
    fn value(&self, ctx: &SniffContext<'_, '_>, head: Head) -> Result<Option<usize>, SniffError> {
        let Some(equals) = head.equals else {
            return Ok(None);
        };
        let value = ctx.store().find_next(
            TokenKind::Whitespace,
            equals + 1,
            Some(head.close),
            true,
        )?;
        Ok(value)
    }

    /// One space before the value.
    fn before_value(&self, ctx: &mut SniffContext<'_, '_>, head: Head) -> Result<(), SniffError> {
        let (Some(equals), Some(value)) = (head.equals, self.value(ctx, head)?) else {
            return Ok(());
        };
        let prev = value - 1;
        // Missing space after `=` is reported there.
        if prev == equals {
            return Ok(());
        }
        if ctx.token(prev)?.kind == TokenKind::Whitespace {
            return self.single_space(
                ctx,
                prev,
                &SpaceCheck {
                    report_at: value,
                    code: "TooMuchSpaceFoundBeforeDirectiveValue",
                    message: "Expected one space before the directive value in a declare statement; found %s.",
                },
            );
        }
        if ctx.add_fixable_error(
            "Expected one space before the directive value in a declare statement; found none.",
            value,
            "NoSpaceFoundBeforeDirectiveValue",
            &[],
        )? {
            self.fix_with(ctx, |ctx| ctx.add_content_before(value, " "))?;
        }
        Ok(())
    }

    /// One space between the value and `)`.
    fn after_value(&self, ctx: &mut SniffContext<'_, '_>, head: Head) -> Result<(), SniffError> {
        let Some(value) = self.value(ctx, head)? else {
            return Ok(());
        };
        let next = value + 1;
        if ctx.token(next)?.kind == TokenKind::Whitespace {
            return self.single_space(
                ctx,
                next,
                &SpaceCheck {
                    report_at: next,
                    code: "TooMuchSpaceFoundAfterDirectiveValue",
                    message: "Expected one space after the directive value in a declare statement; found %s.",
                },
            );
        }
        if ctx.add_fixable_error(
            "Expected one space after the directive value in a declare statement; found none.",
            value,
            "NoSpaceFoundAfterDirectiveValue",
            &[],
        )? {
            self.fix_with(ctx, |ctx| ctx.add_content(value, " "))?;
        }
        Ok(())
    }

    /// `;` directly after `)`, or a block.
    fn after_close_paren(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        head: Head,
    ) -> Result<(), SniffError> {
        let next = head.close + 1;
        let next_kind = ctx.token(next)?.kind;
        if next_kind == TokenKind::Semicolon {
            return Ok(());
        }
        if next_kind == TokenKind::Whitespace
            && ctx.store().kind(next + 1)? == TokenKind::Semicolon
        {
            let found = ctx.token(next)?.content.len().to_string();
            if ctx.add_fixable_error(
                "Expected no space between the closing parenthesis and semi-colon in a declare statement; found %s.",
                next,
                "SpaceFoundAfterClosingParen",
                &[found.as_str()],
            )? {
                self.fix_with(ctx, |ctx| ctx.replace_token(next, ""))?;
            }
            return Ok(());
        }
        self.block(ctx, head)
    }

    /// Brace layout of `declare (...) { ... }`.
    fn block(&self, ctx: &mut SniffContext<'_, '_>, head: Head) -> Result<(), SniffError> {
        let Some(opener) = ctx.token(head.keyword)?.links.scope_opener else {
            return Ok(());
        };
        let eol = ctx.eol();

        let next = head.close + 1;
        let next_token = ctx.token(next)?;
        if next_token.kind == TokenKind::Whitespace {
            if next_token.content.contains(eol)
                && ctx.add_fixable_error(
                    "The opening curly brace should be on the same line as the declare keyword.",
                    next,
                    "OpeningCurlyBraceOnNewLine",
                    &[],
                )?
            {
                self.fix_with(ctx, |ctx| ctx.replace_token(next, " "))?;
            }
            if next_token.content.len() != 1 {
                let found = next_token.content.len().to_string();
                if ctx.add_fixable_error(
                    "Expected one space between the closing parenthesis and opening curly brace in a declare statement; found %s.",
                    next,
                    "TooMuchSpaceFoundAfterClosingParen",
                    &[found.as_str()],
                )? {
                    self.fix_with(ctx, |ctx| ctx.replace_token(next, " "))?;
                }
            }
        } else if next == opener
            && ctx.add_fixable_error(
                "Expected one space between the closing parenthesis and curly brace in a declare statement; found none.",
                next,
                "NoSpaceFoundAfterClosingParen",
                &[],
            )?
        {
            self.fix_with(ctx, |ctx| ctx.add_content_before(next, " "))?;
        }

        let store = ctx.store();
        let opener_line = ctx.token(opener)?.line;
        if let Some(content) = store.find_next(EMPTY_TOKENS, opener + 1, None, true)? {
            let token = ctx.token(content)?;
            if token.line == opener_line
                && token.kind != TokenKind::CloseCurlyBracket
                && token.kind != TokenKind::Eof
                && ctx.add_fixable_error(
                    "The opening curly brace should be the last content on a line in a declare statement.",
                    content,
                    "ContentFoundAfterOpeningCurlyBrace",
                    &[],
                )?
            {
                let last = store
                    .find_previous(TokenKind::Whitespace, content - 1, None, true)?
                    .unwrap_or(opener);
                self.fix_with(ctx, |ctx| {
                    for i in last + 1..content {
                        ctx.replace_token(i, "")?;
                    }
                    ctx.add_newline_before(content)
                })?;
            }
        }

        // Unclosed block during live coding.
        let Some(closer) = ctx.token(opener)?.links.bracket_closer else {
            return Ok(());
        };
        let closer_token = ctx.token(closer)?;
        if closer_token.kind != TokenKind::CloseCurlyBracket {
            return Ok(());
        }
        if closer_token.column == ctx.token(head.keyword)?.column {
            return Ok(());
        }
        if closer_token.line == opener_line {
            if ctx.add_fixable_error(
                "The closing brace of a declare statement should be on a new line.",
                closer,
                "ClosingBraceWrongLine",
                &[],
            )? {
                self.fix_with(ctx, |ctx| ctx.add_content_before(closer, eol))?;
            }
            return Ok(());
        }
        ctx.add_error(
            "The closing brace of a declare statement should be aligned with the declare keyword.",
            closer,
            "ClosingBraceNotAligned",
            &[],
        )?;
        Ok(())
    }

    /// Check the whitespace token at `space` is exactly one space.
    fn single_space(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        space: usize,
        check: &SpaceCheck,
    ) -> Result<(), SniffError> {
        let content = &ctx.token(space)?.content;
        if content.contains(ctx.eol()) {
            if ctx.add_fixable_error(ON_ONE_LINE, space, "DirectiveOnNewLine", &[])? {
                self.fix_with(ctx, |ctx| ctx.replace_token(space, " "))?;
            }
            return Ok(());
        }
        if content.len() == 1 {
            return Ok(());
        }
        let found = content.len().to_string();
        if ctx.add_fixable_error(check.message, check.report_at, check.code, &[found.as_str()])? {
            self.fix_with(ctx, |ctx| ctx.replace_token(space, " "))?;
        }
        Ok(())
    }

    /// Stage edits into the statement's changeset, opened by `process`.
    fn fix_with(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        edits: impl FnOnce(&mut SniffContext<'_, '_>) -> Result<(), SniffError>,
    ) -> Result<(), SniffError> {
        edits(ctx)
    }
}

impl Sniff for DeclareStatement {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> TokenSet {
        TokenSet::single(TokenKind::Declare)
    }

    fn description(&self) -> &'static str {
        "Declare statements are written `declare( directive = value );` with single spaces, \
         a known lowercase directive, and for block form the opening brace on the keyword's \
         line and the closing brace aligned with the keyword."
    }

    fn codes(&self) -> &'static [&'static str] {
        &[
            "SpaceFoundAfterKeyword",
            "DirectiveOnNewLine",
            "TooMuchSpaceFoundBeforeDirective",
            "NoSpaceFoundBeforeDirective",
            "InvalidDirective",
            "DirectiveNotLowerCase",
            "TooMuchSpaceFoundAfterDirective",
            "NoSpaceFoundAfterDirective",
            "TooMuchSpaceFoundBeforeEquals",
            "NoSpaceFoundBeforeEquals",
            "TooMuchSpaceFoundAfterEquals",
            "NoSpaceFoundAfterEquals",
            "TooMuchSpaceFoundBeforeDirectiveValue",
            "NoSpaceFoundBeforeDirectiveValue",
            "TooMuchSpaceFoundAfterDirectiveValue",
            "NoSpaceFoundAfterDirectiveValue",
            "SpaceFoundAfterClosingParen",
            "OpeningCurlyBraceOnNewLine",
            "TooMuchSpaceFoundAfterClosingParen",
            "NoSpaceFoundAfterClosingParen",
            "ContentFoundAfterOpeningCurlyBrace",
            "ClosingBraceWrongLine",
            "ClosingBraceNotAligned",
        ]
    }

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        position: usize,
    ) -> Result<Processed, SniffError> {
        let store = ctx.store();
        // Live coding or a syntax error.
        let end = store.find_end_of_statement(position)?;
        if !matches!(
            store.kind(end)?,
            TokenKind::Semicolon | TokenKind::CloseCurlyBracket
        ) {
            return Ok(Processed::Continue);
        }
        let links = ctx.token(position)?.links;
        let (Some(open), Some(close)) = (links.parenthesis_opener, links.parenthesis_closer) else {
            return Ok(Processed::Continue);
        };
        if store.kind(close)? != TokenKind::CloseParenthesis {
            return Ok(Processed::Continue);
        }
        let head = Head {
            keyword: position,
            open,
            close,
            directive: store.find_next(TokenKind::String, open + 1, Some(close), false)?,
            equals: store.find_next(TokenKind::Equal, open + 1, Some(close), false)?,
        };

        // Fixes to one statement touch neighbouring tokens, so they share a
        // changeset and land together.
        let fixing = ctx.is_fixing();
        if fixing {
            ctx.begin_changeset()?;
        }
        self.after_keyword(ctx, head)?;
        self.after_open_paren(ctx, head)?;
        self.directive_name(ctx, head)?;
        self.after_directive(ctx, head)?;
        self.before_equals(ctx, head)?;
        self.after_equals(ctx, head)?;
        self.before_value(ctx, head)?;
        self.after_value(ctx, head)?;
        self.after_close_paren(ctx, head)?;
        if fixing {
            ctx.end_changeset()?;
        }
        Ok(Processed::Continue)
    }
}

#[cfg(test)]
mod tests;
