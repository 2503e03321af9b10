//! Doc comment splitting.
//!
//! A `/** ... */` comment is split into the parts rule modules navigate:
//!
//! ```text
//! /**            DocCommentOpenTag
//!  * @param x    DocCommentWhitespace, DocCommentStar, DocCommentWhitespace,
//!                DocCommentTag, DocCommentWhitespace, DocCommentString
//!  */            DocCommentWhitespace, DocCommentCloseTag
//! ```
//!
//! Line breaks are `DocCommentWhitespace` tokens of their own. A star is
//! only a `DocCommentStar` when it is the first non-blank character of a
//! line after the first.

use sniff_ir::TokenKind;

/// Split a doc comment into `(kind, byte length)` parts covering `text`.
///
/// An unterminated comment gets a zero-length `DocCommentCloseTag` at the
/// end so every open tag has a closer to link to.
pub(crate) fn split(text: &str, terminated: bool) -> Vec<(TokenKind, usize)> {
    let mut parts = vec![(TokenKind::DocCommentOpenTag, 3)];
    let rest = text.get(3..).unwrap_or_default();
    let (body, close) = if terminated {
        let trimmed = rest.trim_end_matches(['*', '/']);
        (trimmed, &rest[trimmed.len()..])
    } else {
        (rest, "")
    };

    let bytes = body.as_bytes();
    let mut line_start = 0;
    let mut first = true;
    while line_start < body.len() {
        let content_end = memchr::memchr2(b'\n', b'\r', &bytes[line_start..])
            .map_or(body.len(), |o| line_start + o);
        let eol_len = match bytes.get(content_end) {
            Some(b'\r') if bytes.get(content_end + 1) == Some(&b'\n') => 2,
            Some(b'\r' | b'\n') => 1,
            _ => 0,
        };

        let line = &body[line_start..content_end];
        let mut at = 0;
        if !first {
            at = push_blank(line, &mut parts);
            if line[at..].starts_with('*') {
                parts.push((TokenKind::DocCommentStar, 1));
                at += 1;
            }
        }
        split_line(&line[at..], &mut parts);
        if eol_len > 0 {
            parts.push((TokenKind::DocCommentWhitespace, eol_len));
        }

        first = false;
        line_start = content_end + eol_len;
    }

    parts.push((TokenKind::DocCommentCloseTag, close.len()));
    parts
}

/// Content of one line after any leading star: padding, an optional tag,
/// then the string.
fn split_line(line: &str, parts: &mut Vec<(TokenKind, usize)>) {
    let mut at = push_blank(line, parts);
    let rest = &line[at..];
    if rest.starts_with('@') && !starts_with_ignore_case(rest, "@phpcs:") {
        let tag_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        parts.push((TokenKind::DocCommentTag, tag_len));
        at += tag_len;
        at += push_blank(&line[at..], parts);
    }
    if at < line.len() {
        parts.push((TokenKind::DocCommentString, line.len() - at));
    }
}

/// Push leading spaces and tabs as whitespace; returns their length.
fn push_blank(text: &str, parts: &mut Vec<(TokenKind, usize)>) -> usize {
    let len = text.len() - text.trim_start_matches([' ', '\t']).len();
    if len > 0 {
        parts.push((TokenKind::DocCommentWhitespace, len));
    }
    len
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len() && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests;
