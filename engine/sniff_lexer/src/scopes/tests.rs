use crate::{tokenize, LexConfig};
use pretty_assertions::assert_eq;
use sniff_ir::{TokenKind, TokenStore};

fn lex(source: &str) -> TokenStore {
    tokenize(source, &LexConfig::default())
}

fn find(store: &TokenStore, kind: TokenKind, nth: usize) -> usize {
    store
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind == kind)
        .nth(nth)
        .map(|(i, _)| i)
        .unwrap_or_else(|| panic!("no {kind} #{nth}"))
}

#[test]
fn class_and_method_scopes() {
    let store = lex("<?php\nclass A {\n    function b() {}\n}\n");
    let class = find(&store, TokenKind::Class, 0);
    let function = find(&store, TokenKind::Function, 0);
    let class_open = find(&store, TokenKind::OpenCurlyBracket, 0);
    let method_open = find(&store, TokenKind::OpenCurlyBracket, 1);
    let method_close = find(&store, TokenKind::CloseCurlyBracket, 0);
    let class_close = find(&store, TokenKind::CloseCurlyBracket, 1);

    let links = store.tokens()[class].links;
    assert_eq!(links.scope_opener, Some(class_open));
    assert_eq!(links.scope_closer, Some(class_close));
    assert_eq!(store.tokens()[class_close].links.scope_condition, Some(class));

    let links = store.tokens()[function].links;
    assert_eq!(links.scope_opener, Some(method_open));
    assert_eq!(links.scope_closer, Some(method_close));

    let paren = find(&store, TokenKind::OpenParenthesis, 0);
    assert_eq!(store.tokens()[paren].links.parenthesis_owner, Some(function));
    assert_eq!(links.parenthesis_opener, Some(paren));
}

#[test]
fn levels_follow_bracket_depth() {
    let store = lex("<?php f([1]);");
    let levels: Vec<(TokenKind, u32)> = store.iter().map(|t| (t.kind, t.level)).collect();
    assert_eq!(
        levels,
        vec![
            (TokenKind::OpenTag, 0),
            (TokenKind::Whitespace, 0),
            (TokenKind::String, 0),
            (TokenKind::OpenParenthesis, 0),
            (TokenKind::OpenSquareBracket, 1),
            (TokenKind::LNumber, 2),
            (TokenKind::CloseSquareBracket, 1),
            (TokenKind::CloseParenthesis, 0),
            (TokenKind::Semicolon, 0),
            (TokenKind::Eof, 0),
        ]
    );
}

#[test]
fn unmatched_opener_links_to_eof() {
    let store = lex("<?php function f() {\n echo 1;\n");
    let open = find(&store, TokenKind::OpenCurlyBracket, 0);
    let function = find(&store, TokenKind::Function, 0);
    assert_eq!(store.tokens()[open].links.bracket_closer, Some(store.eof()));
    assert_eq!(store.tokens()[function].links.scope_closer, Some(store.eof()));
    assert_eq!(store.tokens()[store.eof()].links.scope_condition, None);
}

#[test]
fn stray_closer_gets_no_links() {
    let store = lex("<?php } echo 1;");
    let close = find(&store, TokenKind::CloseCurlyBracket, 0);
    assert_eq!(store.tokens()[close].links, sniff_ir::Links::default());
}

#[test]
fn mismatched_closer_skips_unmatched_opener() {
    let store = lex("<?php { ( }");
    let brace = find(&store, TokenKind::OpenCurlyBracket, 0);
    let paren = find(&store, TokenKind::OpenParenthesis, 0);
    let close = find(&store, TokenKind::CloseCurlyBracket, 0);
    assert_eq!(store.tokens()[brace].links.bracket_closer, Some(close));
    assert_eq!(store.tokens()[paren].links.parenthesis_closer, Some(store.eof()));
}

#[test]
fn function_with_return_type() {
    let store = lex("<?php function f(): int { return 1; }");
    let function = find(&store, TokenKind::Function, 0);
    let open = find(&store, TokenKind::OpenCurlyBracket, 0);
    assert_eq!(store.tokens()[function].links.scope_opener, Some(open));
}

#[test]
fn abstract_method_has_no_scope() {
    let store = lex("<?php abstract class A { abstract function f(); }");
    let function = find(&store, TokenKind::Function, 0);
    assert_eq!(store.tokens()[function].links.scope_opener, None);
    let class = find(&store, TokenKind::Class, 0);
    assert!(store.tokens()[class].links.scope_opener.is_some());
}

#[test]
fn else_if_leaves_scope_to_if() {
    let store = lex("<?php if ($a) {} else if ($b) {} else {}");
    let else_if = find(&store, TokenKind::Else, 0);
    let second_if = find(&store, TokenKind::If, 1);
    let last_else = find(&store, TokenKind::Else, 1);
    assert_eq!(store.tokens()[else_if].links.scope_opener, None);
    assert_eq!(
        store.tokens()[second_if].links.scope_opener,
        Some(find(&store, TokenKind::OpenCurlyBracket, 1))
    );
    assert_eq!(
        store.tokens()[last_else].links.scope_opener,
        Some(find(&store, TokenKind::OpenCurlyBracket, 2))
    );
}

#[test]
fn declare_without_body_has_no_scope() {
    let store = lex("<?php declare(ticks=1);\nfunction f() {}");
    let declare = find(&store, TokenKind::Declare, 0);
    let links = store.tokens()[declare].links;
    assert_eq!(links.scope_opener, None);
    assert_eq!(links.parenthesis_opener, Some(find(&store, TokenKind::OpenParenthesis, 0)));
}

#[test]
fn attribute_pairs_with_square_bracket() {
    let store = lex("<?php #[Attr] function f() {}");
    let attr = find(&store, TokenKind::Attribute, 0);
    let close = find(&store, TokenKind::CloseSquareBracket, 0);
    assert_eq!(store.tokens()[attr].links.bracket_closer, Some(close));
    assert_eq!(store.tokens()[close].links.bracket_opener, Some(attr));
}

#[test]
fn doc_comment_tags_link() {
    let store = lex("<?php\n/**\n * A.\n */\n");
    let open = find(&store, TokenKind::DocCommentOpenTag, 0);
    let close = find(&store, TokenKind::DocCommentCloseTag, 0);
    assert_eq!(store.tokens()[open].links.comment_closer, Some(close));
    assert_eq!(store.tokens()[close].links.comment_opener, Some(open));
}
