use super::*;

#[test]
fn keywords_ignore_case() {
    assert_eq!(lookup("class"), Some(TokenKind::Class));
    assert_eq!(lookup("CLASS"), Some(TokenKind::Class));
    assert_eq!(lookup("Declare"), Some(TokenKind::Declare));
    assert_eq!(lookup("require_once"), Some(TokenKind::RequireOnce));
    assert_eq!(lookup("die"), Some(TokenKind::Exit));
}

#[test]
fn identifiers_are_not_keywords() {
    for text in ["strict_types", "Foo", "x", "classy", "functional", "__toString"] {
        assert_eq!(lookup(text), None, "{text}");
    }
}

#[test]
fn overlong_and_non_alpha_rejected() {
    assert_eq!(lookup("a_very_long_identifier"), None);
    assert_eq!(lookup("_if"), None);
    assert_eq!(lookup("ñame"), None);
}

#[test]
fn word_operators_and_literals() {
    assert_eq!(lookup("and"), Some(TokenKind::LogicalAnd));
    assert_eq!(lookup("XOR"), Some(TokenKind::LogicalXor));
    assert_eq!(lookup("True"), Some(TokenKind::True));
    assert_eq!(lookup("NULL"), Some(TokenKind::Null));
    assert_eq!(lookup("self"), Some(TokenKind::SelfKw));
}
