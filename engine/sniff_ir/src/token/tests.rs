use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kind_names_round_trip() {
    for &kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(TokenKind::from_name("T_NOPE"), None);
}

#[test]
fn kind_display_uses_t_name() {
    assert_eq!(TokenKind::DocCommentOpenTag.to_string(), "T_DOC_COMMENT_OPEN_TAG");
    assert_eq!(TokenKind::String.to_string(), "T_STRING");
}

#[test]
fn set_membership() {
    const SET: TokenSet = TokenSet::new()
        .with(TokenKind::Class)
        .with(TokenKind::Eof);
    assert!(SET.contains(TokenKind::Class));
    assert!(SET.contains(TokenKind::Eof));
    assert!(!SET.contains(TokenKind::Trait));
    assert_eq!(SET.len(), 2);
    assert_eq!(SET.iter().collect::<Vec<_>>(), vec![TokenKind::Class, TokenKind::Eof]);
}

#[test]
fn set_without_and_union() {
    let set = TokenSet::from_kinds(&[TokenKind::Comma, TokenKind::Colon]).without(TokenKind::Comma);
    assert!(!set.contains(TokenKind::Comma));
    let both = set.union(TokenSet::single(TokenKind::Semicolon));
    assert_eq!(both.len(), 2);
    assert!(TokenSet::new().is_empty());
}

#[test]
fn empty_tokens_cover_trivia() {
    assert!(EMPTY_TOKENS.contains(TokenKind::Whitespace));
    assert!(EMPTY_TOKENS.contains(TokenKind::DocCommentStar));
    assert!(EMPTY_TOKENS.contains(TokenKind::PhpcsDisable));
    assert!(!COMMENT_TOKENS.contains(TokenKind::Whitespace));
    assert!(!EMPTY_TOKENS.contains(TokenKind::String));
}

#[test]
fn directive_codes_only_on_directives() {
    let mut token = Token::new(TokenKind::PhpcsDisable, "// phpcs:disable A.B", Span::new(0, 20));
    assert_eq!(token.directive_codes(), None);
    token.directive = Some(Box::new(Directive {
        codes: smallvec::smallvec!["A.B".to_owned()],
    }));
    assert_eq!(token.directive_codes(), Some(&["A.B".to_owned()][..]));
}

#[test]
fn opener_closer_pairs() {
    for kind in [
        TokenKind::OpenParenthesis,
        TokenKind::OpenSquareBracket,
        TokenKind::OpenCurlyBracket,
    ] {
        assert!(kind.is_opener());
        let closer = kind.matching_closer();
        assert!(closer.is_some_and(TokenKind::is_closer));
    }
    assert_eq!(TokenKind::Semicolon.matching_closer(), None);
}
