//! `BigBite.Commenting.DocCommentLineLength`

use sniff_ir::{TokenKind, TokenSet};

use crate::{OptionError, Processed, Sniff, SniffContext, SniffError, SniffOptions};

const METRIC: &str = "Line length";

const COMMENT_TRIVIA: TokenSet =
    TokenSet::from_kinds(&[TokenKind::DocCommentWhitespace, TokenKind::DocCommentStar]);

/// Limits the length of doc-comment lines.
///
/// Lines longer than `lineLimit` get a warning; lines longer than
/// `absoluteLineLimit` get an error instead (0 disables the error). A
/// comment is left alone once it contains a line whose last word alone
/// would not fit, such as a long URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocCommentLineLength {
    pub line_limit: u32,
    pub absolute_line_limit: u32,
}

impl Default for DocCommentLineLength {
    fn default() -> Self {
        DocCommentLineLength {
            line_limit: 80,
            absolute_line_limit: 100,
        }
    }
}

impl DocCommentLineLength {
    pub const CODE: &'static str = "BigBite.Commenting.DocCommentLineLength";

    pub fn from_options(options: &SniffOptions) -> Result<Self, OptionError> {
        options.expect_keys(&["lineLimit", "absoluteLineLimit"])?;
        let defaults = DocCommentLineLength::default();
        Ok(DocCommentLineLength {
            line_limit: options.get_u32("lineLimit", defaults.line_limit)?,
            absolute_line_limit: options
                .get_u32("absoluteLineLimit", defaults.absolute_line_limit)?,
        })
    }

    fn metric_bucket(&self, line_length: u32) -> String {
        if line_length <= self.line_limit {
            format!("{} or less", self.line_limit)
        } else if line_length <= self.absolute_line_limit {
            format!("{} or less", self.absolute_line_limit)
        } else {
            format!("more than {}", self.absolute_line_limit)
        }
    }
}

/// Whether the first content of a comment is a plugin or theme header.
fn is_wordpress_header(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    let Some(rest) = lower
        .strip_prefix("plugin")
        .or_else(|| lower.strip_prefix("theme"))
    else {
        return false;
    };
    let name = rest.trim_start();
    name.len() < rest.len() && name.starts_with("name:")
}

impl Sniff for DocCommentLineLength {
    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn register(&self) -> TokenSet {
        TokenSet::single(TokenKind::DocCommentOpenTag)
    }

    fn description(&self) -> &'static str {
        "Doc-comment lines should not exceed `lineLimit` characters (warning, default 80) \
         and must not exceed `absoluteLineLimit` characters (error, default 100; 0 disables). \
         Plugin and theme headers and lines ending in an unbreakable word are not checked."
    }

    fn codes(&self) -> &'static [&'static str] {
        &["TooLong", "MaxExceeded"]
    }

    fn process(
        &self,
        ctx: &mut SniffContext<'_, '_>,
        position: usize,
    ) -> Result<Processed, SniffError> {
        let store = ctx.store();
        let Some(closer) = ctx.token(position)?.links.comment_closer else {
            return Ok(Processed::Continue);
        };
        // Unfinished comment during live coding.
        if ctx.token(closer)?.content.is_empty() {
            return Ok(Processed::Continue);
        }

        let Some(first) = store.find_next(COMMENT_TRIVIA, position + 1, Some(closer), true)? else {
            return Ok(Processed::Continue);
        };
        if is_wordpress_header(&ctx.token(first)?.content) {
            return Ok(Processed::Continue);
        }

        for i in position + 1..closer {
            let token = ctx.token(i)?;
            if token.kind != TokenKind::DocCommentString {
                continue;
            }
            let line_length = token.column + token.length - 1;
            ctx.record_metric(i, METRIC, &self.metric_bucket(line_length))?;

            if line_length > self.line_limit {
                let content = token.content.as_str();
                let trimmed = content.trim_start_matches(['/', '#', '\t', ' ']);
                let indent = (token.column - 1) as usize + (content.len() - trimmed.len());
                let mut unbreakable = token.length as usize;
                if let Some(space) = content.rfind(' ') {
                    unbreakable = unbreakable.saturating_sub(content[..space].chars().count() + 1);
                }
                if unbreakable + indent > self.line_limit as usize {
                    return Ok(Processed::Continue);
                }
            }

            let found = line_length.to_string();
            if self.absolute_line_limit > 0 && line_length > self.absolute_line_limit {
                ctx.add_error(
                    "Line exceeds maximum limit of %s characters; contains %s characters",
                    i,
                    "MaxExceeded",
                    &[self.absolute_line_limit.to_string().as_str(), found.as_str()],
                )?;
            } else if line_length > self.line_limit {
                ctx.add_warning(
                    "Line exceeds %s characters; contains %s characters",
                    i,
                    "TooLong",
                    &[self.line_limit.to_string().as_str(), found.as_str()],
                )?;
            }
        }
        Ok(Processed::Continue)
    }
}
