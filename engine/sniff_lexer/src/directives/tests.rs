use super::*;
use pretty_assertions::assert_eq;

fn codes(comment: &str) -> Option<(TokenKind, Vec<String>)> {
    parse(comment).map(|(kind, d)| (kind, d.codes.into_vec()))
}

#[test]
fn disable_with_codes_and_note() {
    assert_eq!(
        codes("// phpcs:disable BigBite.Files.FileName, Generic.Arrays -- legacy file"),
        Some((
            TokenKind::PhpcsDisable,
            vec!["BigBite.Files.FileName".to_owned(), "Generic.Arrays".to_owned()]
        ))
    );
}

#[test]
fn bare_directives_mean_all_codes() {
    assert_eq!(codes("// phpcs:enable"), Some((TokenKind::PhpcsEnable, vec![])));
    assert_eq!(codes("# phpcs:ignore"), Some((TokenKind::PhpcsIgnore, vec![])));
    assert_eq!(codes("/* phpcs:ignoreFile */"), Some((TokenKind::PhpcsIgnoreFile, vec![])));
}

#[test]
fn keyword_case_is_ignored() {
    assert_eq!(
        codes("// PHPCS:Disable BigBite"),
        Some((TokenKind::PhpcsDisable, vec!["BigBite".to_owned()]))
    );
}

#[test]
fn legacy_forms() {
    assert_eq!(
        codes("// @codingStandardsIgnoreStart"),
        Some((TokenKind::PhpcsDisable, vec![]))
    );
    assert_eq!(
        codes("// @codingStandardsIgnoreEnd"),
        Some((TokenKind::PhpcsEnable, vec![]))
    );
    assert_eq!(
        codes("// @codingStandardsIgnoreLine"),
        Some((TokenKind::PhpcsIgnore, vec![]))
    );
}

#[test]
fn ordinary_comments_are_not_directives() {
    assert_eq!(codes("// just a note"), None);
    assert_eq!(codes("// phpcs:disabled"), None);
    assert_eq!(codes("// see phpcs:disable"), None);
    assert_eq!(codes("/* phpcs:disable\n */"), None);
}
