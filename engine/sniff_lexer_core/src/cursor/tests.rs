use super::*;
use crate::SourceBuffer;

#[test]
fn peek_past_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut c = buf.cursor();
    assert_eq!(c.current(), b'a');
    assert_eq!(c.peek(), b'b');
    assert_eq!(c.peek2(), 0);
    c.advance_n(2);
    assert!(c.is_eof());
    assert_eq!(c.current(), 0);
}

#[test]
fn eat_line_break_handles_all_endings() {
    for (src, expected) in [("\n", 1), ("\r\n", 2), ("\r", 1)] {
        let buf = SourceBuffer::new(src);
        let mut c = buf.cursor();
        assert!(c.eat_line_break());
        assert_eq!(c.pos(), expected, "source {src:?}");
    }

    let buf = SourceBuffer::new("x");
    let mut c = buf.cursor();
    assert!(!c.eat_line_break());
    assert_eq!(c.pos(), 0);
}

#[test]
fn eat_until_finds_needle() {
    let buf = SourceBuffer::new("abc*/def");
    let mut c = buf.cursor();
    assert!(c.eat_until(b"*/"));
    assert_eq!(c.pos(), 3);
}

#[test]
fn eat_until_missing_needle_moves_to_end() {
    let buf = SourceBuffer::new("/* never closed");
    let mut c = buf.cursor();
    c.advance_n(2);
    assert!(!c.eat_until(b"*/"));
    assert!(c.is_eof());
}

#[test]
fn line_comment_stops_at_close_tag() {
    let buf = SourceBuffer::new("// a ? b ?> html");
    let mut c = buf.cursor();
    c.eat_line_comment_body();
    assert_eq!(c.slice(0, c.pos()), "// a ? b ");
}

#[test]
fn line_comment_stops_at_newline() {
    let buf = SourceBuffer::new("# note\r\nnext");
    let mut c = buf.cursor();
    c.eat_line_comment_body();
    assert_eq!(c.pos(), 6);
}

#[test]
fn quoted_skips_escapes() {
    let buf = SourceBuffer::new(r#""a\"b" rest"#);
    let mut c = buf.cursor();
    c.advance();
    assert!(c.eat_quoted(b'"'));
    assert_eq!(c.slice(0, c.pos()), r#""a\"b""#);
}

#[test]
fn unterminated_quote_reaches_eof() {
    let buf = SourceBuffer::new("'abc");
    let mut c = buf.cursor();
    c.advance();
    assert!(!c.eat_quoted(b'\''));
    assert!(c.is_eof());
}

#[test]
fn starts_with_ignore_case() {
    let buf = SourceBuffer::new("<?PHP echo");
    let c = buf.cursor();
    assert!(c.starts_with_ignore_case(b"<?php"));
    assert!(!c.starts_with(b"<?php"));
}

#[test]
fn ident_classes() {
    assert!(is_ident_start(b'a'));
    assert!(is_ident_start(b'_'));
    assert!(is_ident_start(0xC3));
    assert!(!is_ident_start(b'1'));
    assert!(is_ident_continue(b'1'));
    assert!(!is_ident_continue(b'-'));
    assert!(!is_ident_continue(0));
}
