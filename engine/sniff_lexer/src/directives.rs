//! Suppression directive parsing.
//!
//! Recognised in line comments and single-line block comments:
//!
//! ```text
//! // phpcs:disable BigBite.Files.FileName, Generic.Arrays -- reason
//! // phpcs:enable
//! // phpcs:ignore BigBite.PHP.Heredoc
//! // phpcs:ignoreFile
//! // @codingStandardsIgnoreStart / @codingStandardsIgnoreEnd / @codingStandardsIgnoreLine
//! ```
//!
//! Directive keywords are matched case-insensitively; the code list ends at
//! an optional ` -- note` suffix.

use sniff_ir::{Directive, TokenKind};
use smallvec::SmallVec;

/// Classify a comment as a suppression directive.
///
/// Returns the directive token kind and its code list, or `None` for an
/// ordinary comment.
pub(crate) fn parse(comment: &str) -> Option<(TokenKind, Directive)> {
    let body = comment_body(comment)?.trim();

    const FORMS: &[(&str, TokenKind)] = &[
        ("phpcs:ignorefile", TokenKind::PhpcsIgnoreFile),
        ("phpcs:disable", TokenKind::PhpcsDisable),
        ("phpcs:enable", TokenKind::PhpcsEnable),
        ("phpcs:ignore", TokenKind::PhpcsIgnore),
        ("@codingstandardsignorefile", TokenKind::PhpcsIgnoreFile),
        ("@codingstandardsignorestart", TokenKind::PhpcsDisable),
        ("@codingstandardsignoreend", TokenKind::PhpcsEnable),
        ("@codingstandardsignoreline", TokenKind::PhpcsIgnore),
    ];

    for &(prefix, kind) in FORMS {
        if body.len() < prefix.len() || !body.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes()) {
            continue;
        }
        let rest = &body[prefix.len()..];
        if !rest.is_empty() && !rest.starts_with(|c: char| c.is_whitespace()) {
            return None;
        }
        let legacy = prefix.starts_with('@');
        let codes = if legacy { SmallVec::new() } else { parse_codes(rest) };
        return Some((kind, Directive { codes }));
    }
    None
}

/// Text between the comment markers, or `None` if the comment spans lines.
fn comment_body(comment: &str) -> Option<&str> {
    if let Some(rest) = comment.strip_prefix("//") {
        return Some(rest);
    }
    if let Some(rest) = comment.strip_prefix('#') {
        return Some(rest);
    }
    let inner = comment.strip_prefix("/*")?.strip_suffix("*/")?;
    if inner.contains(['\n', '\r']) {
        return None;
    }
    Some(inner)
}

fn parse_codes(rest: &str) -> SmallVec<[String; 2]> {
    let list = match rest.find("--") {
        Some(note) => &rest[..note],
        None => rest,
    };
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests;
