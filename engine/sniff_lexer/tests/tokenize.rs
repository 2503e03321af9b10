#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tokenizer behavior: round-trip, live coding, metadata.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sniff_ir::{TokenKind, TokenStore};
use sniff_lexer::{tokenize, LexConfig};

fn lex(source: &str) -> TokenStore {
    tokenize(source, &LexConfig::default())
}

fn dump(store: &TokenStore) -> Vec<(TokenKind, &str)> {
    store.iter().map(|t| (t.kind, t.content.as_str())).collect()
}

#[test]
fn declare_token_sequence() {
    let store = lex("<?php\ndeclare(strict_types=1);\n");
    assert_eq!(
        dump(&store),
        vec![
            (TokenKind::OpenTag, "<?php"),
            (TokenKind::Whitespace, "\n"),
            (TokenKind::Declare, "declare"),
            (TokenKind::OpenParenthesis, "("),
            (TokenKind::String, "strict_types"),
            (TokenKind::Equal, "="),
            (TokenKind::LNumber, "1"),
            (TokenKind::CloseParenthesis, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Whitespace, "\n"),
            (TokenKind::Eof, ""),
        ]
    );
    let declare = 2;
    let token = &store.tokens()[declare];
    assert_eq!((token.line, token.column, token.length), (2, 1, 7));
    assert_eq!(token.links.parenthesis_closer, Some(7));
}

#[test]
fn unterminated_block_comment_round_trips() {
    let source = "<?php\n/* never\n   closed";
    let store = lex(source);
    let comments: Vec<_> = store.iter().filter(|t| t.kind == TokenKind::Comment).collect();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "/* never\n   closed");
    assert_eq!(store.source(), source);
}

#[test]
fn unterminated_doc_comment_gets_synthetic_close() {
    let store = lex("<?php\n/**\n * Open");
    let eof = store.eof();
    let close = &store.tokens()[eof - 1];
    assert_eq!(close.kind, TokenKind::DocCommentCloseTag);
    assert!(close.content.is_empty());
    let open = store
        .iter()
        .position(|t| t.kind == TokenKind::DocCommentOpenTag);
    assert_eq!(store.tokens()[eof - 1].links.comment_opener, open);
}

#[test]
fn doc_comment_columns() {
    let store = lex("<?php\n\t/**\n\t * Text here.\n\t */\n");
    let text = store
        .iter()
        .find(|t| t.kind == TokenKind::DocCommentString)
        .map(|t| (t.line, t.column, t.length));
    assert_eq!(text, Some((3, 7, 10)));
}

#[test]
fn snippet_without_open_tag_is_code() {
    let store = lex("echo $x;");
    assert_eq!(store.kind(0).ok(), Some(TokenKind::Echo));
}

#[test]
fn crlf_source_positions() {
    let store = lex("<?php\r\n$a = 1;\r\n$b = 2;\r\n");
    let b = store
        .iter()
        .find(|t| t.content == "$b")
        .map(|t| (t.line, t.column));
    assert_eq!(b, Some((3, 1)));
    assert_eq!(store.eol(), "\r\n");
}

#[test]
fn retokenizing_after_indent_change_updates_columns() {
    let before = lex("<?php\nif ($a) {\n\techo 1;\n}\n");
    let after = lex("<?php\nif ($a) {\n    echo 1;\n}\n");
    let echo_column = |store: &TokenStore| {
        store
            .iter()
            .find(|t| t.kind == TokenKind::Echo)
            .map(|t| t.column)
    };
    assert_eq!(echo_column(&before), Some(5));
    assert_eq!(echo_column(&after), Some(5));
}

proptest! {
    #[test]
    fn concatenated_content_reproduces_source(source in "\\PC*") {
        let store = lex(&source);
        prop_assert_eq!(store.source(), source);
        prop_assert_eq!(store.tokens().last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn php_like_sources_round_trip(
        source in "(<\\?php|\\?>|/\\*\\*?|\\*/|<<<[A-Z']*\n|[a-z]+|\\$[a-z]+|['\"`{}()\\[\\];#\t \n\r]){0,64}",
    ) {
        let store = lex(&source);
        prop_assert_eq!(store.source(), source);
    }

    #[test]
    fn every_opener_has_a_closer(source in "(<\\?php |[{}()\\[\\]]|if|function f|class A|;| ){0,48}") {
        let store = lex(&source);
        for token in store.iter() {
            if token.kind.is_opener() {
                let links = token.links;
                prop_assert!(links.bracket_closer.or(links.parenthesis_closer).is_some());
            }
        }
    }
}
