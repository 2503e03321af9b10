use super::*;
use crate::raw_spans;
use pretty_assertions::assert_eq;

fn cook(source: &str) -> Vec<(TokenKind, String)> {
    let raw = raw_spans(source);
    TokenCooker::new(source, &raw)
        .cook_all()
        .into_iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| (t.kind, t.content))
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    cook(source).into_iter().map(|(kind, _)| kind).collect()
}

fn t(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_owned())
}

#[test]
fn declare_statement() {
    use TokenKind::*;
    assert_eq!(
        kinds("<?php\ndeclare(strict_types=1);\n"),
        vec![OpenTag, Declare, OpenParenthesis, String, Equal, LNumber, CloseParenthesis, Semicolon, Eof]
    );
}

#[test]
fn spans_cover_source() {
    let source = "<?php\n/**\n * Doc.\n */\nclass A {}\n";
    let raw = raw_spans(source);
    let tokens = TokenCooker::new(source, &raw).cook_all();
    let mut at = 0;
    for token in &tokens {
        assert_eq!(token.span.start, at);
        assert_eq!(&source[token.span.range()], token.content);
        at = token.span.end;
    }
    assert_eq!(at as usize, source.len());
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn member_and_function_names_are_strings() {
    use TokenKind::*;
    assert_eq!(
        kinds("<?php $a->class; A::list(); function &print() {} const IF = 1;"),
        vec![
            OpenTag, Variable, ObjectOperator, String, Semicolon, String, DoubleColon, String,
            OpenParenthesis, CloseParenthesis, Semicolon, Function, BitwiseAnd, String,
            OpenParenthesis, CloseParenthesis, OpenCurlyBracket, CloseCurlyBracket, Const,
            String, Equal, LNumber, Semicolon, Eof,
        ]
    );
}

#[test]
fn enum_needs_a_name() {
    use TokenKind::*;
    assert_eq!(kinds("<?php enum Suit {}")[1], Enum);
    assert_eq!(kinds("<?php $x = enum;")[3], String);
}

#[test]
fn interpolation_decides_string_kind() {
    assert_eq!(
        cook(r#"<?php "a" "$b" "{$c}" "\$d" 'e$f';"#)[1..6],
        [
            t(TokenKind::ConstantEncapsedString, r#""a""#),
            t(TokenKind::DoubleQuotedString, r#""$b""#),
            t(TokenKind::DoubleQuotedString, r#""{$c}""#),
            t(TokenKind::ConstantEncapsedString, r#""\$d""#),
            t(TokenKind::ConstantEncapsedString, "'e$f'"),
        ]
    );
}

#[test]
fn block_comment_splits_per_line() {
    assert_eq!(
        cook("<?php /* one\n   two */")[1..3],
        [t(TokenKind::Comment, "/* one\n"), t(TokenKind::Comment, "   two */")]
    );
}

#[test]
fn unterminated_block_comment_is_one_token() {
    assert_eq!(
        cook("<?php /* one\n two"),
        vec![
            t(TokenKind::OpenTag, "<?php"),
            t(TokenKind::Comment, "/* one\n two"),
            t(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn directives_carry_codes() {
    let source = "<?php // phpcs:disable BigBite.PHP\n";
    let raw = raw_spans(source);
    let tokens = TokenCooker::new(source, &raw).cook_all();
    let directive = tokens
        .iter()
        .find(|t| t.kind == TokenKind::PhpcsDisable)
        .and_then(|t| t.directive_codes().map(<[_]>::to_vec));
    assert_eq!(directive, Some(vec!["BigBite.PHP".to_owned()]));
}

#[test]
fn heredoc_and_nowdoc() {
    use TokenKind::*;
    assert_eq!(
        kinds("<?php $a = <<<EOT\nx\ny\nEOT;\n$b = <<<'N'\nz\nN;\n"),
        vec![
            OpenTag, Variable, Equal, StartHeredoc, Heredoc, Heredoc, EndHeredoc, Semicolon,
            Variable, Equal, StartNowdoc, Nowdoc, EndNowdoc, Semicolon, Eof,
        ]
    );
}

#[test]
fn inline_html_splits_per_line() {
    assert_eq!(
        cook("<p>\n<b>\n<?php echo 1 ?>tail"),
        vec![
            t(TokenKind::InlineHtml, "<p>\n"),
            t(TokenKind::InlineHtml, "<b>\n"),
            t(TokenKind::OpenTag, "<?php"),
            t(TokenKind::Echo, "echo"),
            t(TokenKind::LNumber, "1"),
            t(TokenKind::CloseTag, "?>"),
            t(TokenKind::InlineHtml, "tail"),
            t(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn namespaced_names() {
    use TokenKind::*;
    assert_eq!(
        kinds("<?php class A implements \\Stringable, B\\C {}"),
        vec![
            OpenTag, Class, String, Implements, NsSeparator, String, Comma, String, NsSeparator,
            String, OpenCurlyBracket, CloseCurlyBracket, Eof,
        ]
    );
}
