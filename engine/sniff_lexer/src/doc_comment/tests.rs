use super::*;
use pretty_assertions::assert_eq;
use TokenKind::{
    DocCommentCloseTag as Close, DocCommentOpenTag as Open, DocCommentStar as Star,
    DocCommentString as Str, DocCommentTag as Tag, DocCommentWhitespace as Ws,
};

fn parts(text: &str, terminated: bool) -> Vec<(TokenKind, String)> {
    let mut at = 0;
    let out = split(text, terminated)
        .into_iter()
        .map(|(kind, len)| {
            let piece = text[at..at + len].to_owned();
            at += len;
            (kind, piece)
        })
        .collect();
    assert_eq!(at, text.len(), "parts must cover the comment");
    out
}

fn p(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_owned())
}

#[test]
fn single_line() {
    assert_eq!(
        parts("/** Short. */", true),
        vec![p(Open, "/**"), p(Ws, " "), p(Str, "Short. "), p(Close, "*/")]
    );
}

#[test]
fn multi_line_with_tag() {
    assert_eq!(
        parts("/**\n * Summary.\n *\n * @param int $x The x.\n */", true),
        vec![
            p(Open, "/**"),
            p(Ws, "\n"),
            p(Ws, " "),
            p(Star, "*"),
            p(Ws, " "),
            p(Str, "Summary."),
            p(Ws, "\n"),
            p(Ws, " "),
            p(Star, "*"),
            p(Ws, "\n"),
            p(Ws, " "),
            p(Star, "*"),
            p(Ws, " "),
            p(Tag, "@param"),
            p(Ws, " "),
            p(Str, "int $x The x."),
            p(Ws, "\n"),
            p(Ws, " "),
            p(Close, "*/"),
        ]
    );
}

#[test]
fn crlf_line_breaks_are_one_token() {
    assert_eq!(
        parts("/**\r\n * A\r\n */", true),
        vec![
            p(Open, "/**"),
            p(Ws, "\r\n"),
            p(Ws, " "),
            p(Star, "*"),
            p(Ws, " "),
            p(Str, "A"),
            p(Ws, "\r\n"),
            p(Ws, " "),
            p(Close, "*/"),
        ]
    );
}

#[test]
fn phpcs_annotation_is_not_a_tag() {
    assert_eq!(
        parts("/** @phpcs:ignore X */", true),
        vec![p(Open, "/**"), p(Ws, " "), p(Str, "@phpcs:ignore X "), p(Close, "*/")]
    );
}

#[test]
fn extra_stars_belong_to_the_close_tag() {
    assert_eq!(
        parts("/** A **/", true),
        vec![p(Open, "/**"), p(Ws, " "), p(Str, "A "), p(Close, "**/")]
    );
}

#[test]
fn unterminated_gets_synthetic_close() {
    assert_eq!(
        parts("/**\n * open", false),
        vec![
            p(Open, "/**"),
            p(Ws, "\n"),
            p(Ws, " "),
            p(Star, "*"),
            p(Ws, " "),
            p(Str, "open"),
            p(Close, ""),
        ]
    );
    assert_eq!(parts("/**", false), vec![p(Open, "/**"), p(Close, "")]);
}
