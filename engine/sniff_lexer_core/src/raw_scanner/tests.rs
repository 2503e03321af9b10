use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn scan(source: &str) -> Vec<(RawTag, String)> {
    let buf = SourceBuffer::new(source);
    let mode = initial_mode(source.as_bytes());
    let mut scanner = RawScanner::new(buf.cursor(), mode);
    let mut out = Vec::new();
    let mut pos = 0usize;
    for tok in scanner.by_ref() {
        let end = pos + tok.len as usize;
        out.push((tok.tag, source[pos..end].to_owned()));
        pos = end;
    }
    assert_eq!(pos, source.len(), "tokens must cover the source");
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
    out
}

fn tags(source: &str) -> Vec<RawTag> {
    scan(source).into_iter().map(|(tag, _)| tag).collect()
}

#[test]
fn initial_mode_detects_open_tag() {
    assert_eq!(initial_mode(b"<?php\necho 1;"), ScanMode::Html);
    assert_eq!(initial_mode(b"<html><?= $x ?>"), ScanMode::Html);
    assert_eq!(initial_mode(b"<?PHP echo 1;"), ScanMode::Html);
    assert_eq!(initial_mode(b"declare(strict_types=1);"), ScanMode::Code);
    assert_eq!(initial_mode(b"$a = '<?phpx';"), ScanMode::Code);
}

#[test]
fn html_then_code() {
    assert_eq!(
        scan("<p>\n<?php echo 1; ?>\n"),
        vec![
            (RawTag::InlineHtml, "<p>\n".to_owned()),
            (RawTag::OpenTag, "<?php".to_owned()),
            (RawTag::Whitespace, " ".to_owned()),
            (RawTag::Ident, "echo".to_owned()),
            (RawTag::Whitespace, " ".to_owned()),
            (RawTag::Int, "1".to_owned()),
            (RawTag::Semicolon, ";".to_owned()),
            (RawTag::Whitespace, " ".to_owned()),
            (RawTag::CloseTag, "?>".to_owned()),
            (RawTag::InlineHtml, "\n".to_owned()),
        ]
    );
}

#[test]
fn html_question_mark_that_is_not_a_tag() {
    assert_eq!(
        tags("<?xml ?>\n<?php\n"),
        vec![RawTag::InlineHtml, RawTag::OpenTag, RawTag::Whitespace]
    );
}

#[test]
fn whitespace_ends_at_each_line_break() {
    assert_eq!(
        scan("a  \n\n\tb"),
        vec![
            (RawTag::Ident, "a".to_owned()),
            (RawTag::Whitespace, "  \n".to_owned()),
            (RawTag::Whitespace, "\n".to_owned()),
            (RawTag::Whitespace, "\t".to_owned()),
            (RawTag::Ident, "b".to_owned()),
        ]
    );
}

#[test]
fn comment_flavours() {
    assert_eq!(
        tags("// a\n# b\n#[Attr]\n/* c */ /** d */ /**/"),
        vec![
            RawTag::LineComment,
            RawTag::Whitespace,
            RawTag::LineComment,
            RawTag::Whitespace,
            RawTag::AttributeOpen,
            RawTag::Ident,
            RawTag::RightBracket,
            RawTag::Whitespace,
            RawTag::BlockComment,
            RawTag::Whitespace,
            RawTag::DocComment,
            RawTag::Whitespace,
            RawTag::BlockComment,
        ]
    );
}

#[test]
fn unterminated_comments_run_to_eof() {
    assert_eq!(
        scan("x /* open"),
        vec![
            (RawTag::Ident, "x".to_owned()),
            (RawTag::Whitespace, " ".to_owned()),
            (RawTag::UnterminatedBlockComment, "/* open".to_owned()),
        ]
    );
    assert_eq!(tags("/**\n * doc"), vec![RawTag::UnterminatedDocComment]);
}

#[test]
fn strings() {
    assert_eq!(
        tags(r#"'a' "b\"c" `ls`"#),
        vec![
            RawTag::SingleQuoted,
            RawTag::Whitespace,
            RawTag::DoubleQuoted,
            RawTag::Whitespace,
            RawTag::Backtick,
        ]
    );
    assert_eq!(
        scan("$a = 'open"),
        vec![
            (RawTag::Variable, "$a".to_owned()),
            (RawTag::Whitespace, " ".to_owned()),
            (RawTag::Equal, "=".to_owned()),
            (RawTag::Whitespace, " ".to_owned()),
            (RawTag::UnterminatedString, "'open".to_owned()),
        ]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        tags("1 1_000 0x1F 0b101 0o17 1.5 .5 1e10 2E-3"),
        vec![
            RawTag::Int,
            RawTag::Whitespace,
            RawTag::Int,
            RawTag::Whitespace,
            RawTag::Int,
            RawTag::Whitespace,
            RawTag::Int,
            RawTag::Whitespace,
            RawTag::Int,
            RawTag::Whitespace,
            RawTag::Float,
            RawTag::Whitespace,
            RawTag::Float,
            RawTag::Whitespace,
            RawTag::Float,
            RawTag::Whitespace,
            RawTag::Float,
        ]
    );
}

#[test]
fn longest_operator_wins() {
    assert_eq!(
        scan("a<=>b===c??=d?->e**=f...g"),
        vec![
            (RawTag::Ident, "a".to_owned()),
            (RawTag::Spaceship, "<=>".to_owned()),
            (RawTag::Ident, "b".to_owned()),
            (RawTag::Identical, "===".to_owned()),
            (RawTag::Ident, "c".to_owned()),
            (RawTag::CoalesceEqual, "??=".to_owned()),
            (RawTag::Ident, "d".to_owned()),
            (RawTag::NullsafeArrow, "?->".to_owned()),
            (RawTag::Ident, "e".to_owned()),
            (RawTag::PowEqual, "**=".to_owned()),
            (RawTag::Ident, "f".to_owned()),
            (RawTag::Ellipsis, "...".to_owned()),
            (RawTag::Ident, "g".to_owned()),
        ]
    );
}

#[test]
fn dollar_without_name() {
    assert_eq!(
        tags("$$a $"),
        vec![RawTag::Dollar, RawTag::Variable, RawTag::Whitespace, RawTag::Dollar]
    );
}

#[test]
fn heredoc_with_body_and_end() {
    assert_eq!(
        scan("$x = <<<EOT\nline one\n  EOT;\n"),
        vec![
            (RawTag::Variable, "$x".to_owned()),
            (RawTag::Whitespace, " ".to_owned()),
            (RawTag::Equal, "=".to_owned()),
            (RawTag::Whitespace, " ".to_owned()),
            (RawTag::HeredocStart, "<<<EOT\n".to_owned()),
            (RawTag::HeredocBody, "line one\n  ".to_owned()),
            (RawTag::HeredocEnd, "EOT".to_owned()),
            (RawTag::Semicolon, ";".to_owned()),
            (RawTag::Whitespace, "\n".to_owned()),
        ]
    );
}

#[test]
fn nowdoc_and_empty_body() {
    assert_eq!(
        tags("<<<'RAW'\nRAW;"),
        vec![RawTag::HeredocStart, RawTag::HeredocEnd, RawTag::Semicolon]
    );
}

#[test]
fn heredoc_label_needs_word_boundary() {
    assert_eq!(
        scan("<<<END\nENDING\nEND\n"),
        vec![
            (RawTag::HeredocStart, "<<<END\n".to_owned()),
            (RawTag::HeredocBody, "ENDING\n".to_owned()),
            (RawTag::HeredocEnd, "END".to_owned()),
            (RawTag::Whitespace, "\n".to_owned()),
        ]
    );
}

#[test]
fn unterminated_heredoc_runs_to_eof() {
    assert_eq!(
        tags("<<<EOT\nnever\nclosed"),
        vec![RawTag::HeredocStart, RawTag::HeredocBody]
    );
}

#[test]
fn shift_left_is_not_heredoc() {
    assert_eq!(
        tags("$a <<< 1"),
        vec![
            RawTag::Variable,
            RawTag::Whitespace,
            RawTag::ShiftLeft,
            RawTag::Less,
            RawTag::Whitespace,
            RawTag::Int,
        ]
    );
}

#[test]
fn control_bytes_are_unknown() {
    assert_eq!(tags("a\u{1}b"), vec![RawTag::Ident, RawTag::Unknown, RawTag::Ident]);
    assert_eq!(tags("a\0b"), vec![RawTag::Ident, RawTag::Unknown, RawTag::Ident]);
}

#[test]
fn non_ascii_identifiers() {
    assert_eq!(scan("$café"), vec![(RawTag::Variable, "$café".to_owned())]);
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = RawScanner::new(buf.cursor(), ScanMode::Code);
    assert_eq!(scanner.next_token(), RawToken { tag: RawTag::Eof, len: 0 });
    assert_eq!(scanner.next_token(), RawToken { tag: RawTag::Eof, len: 0 });
}

proptest! {
    #[test]
    fn token_lengths_cover_any_source(source in "\\PC{0,200}") {
        let buf = SourceBuffer::new(&source);
        let scanner = RawScanner::new(buf.cursor(), initial_mode(source.as_bytes()));
        let mut total = 0usize;
        for tok in scanner {
            prop_assert!(tok.len > 0);
            total += tok.len as usize;
            prop_assert!(source.is_char_boundary(total));
        }
        prop_assert_eq!(total, source.len());
    }
}
