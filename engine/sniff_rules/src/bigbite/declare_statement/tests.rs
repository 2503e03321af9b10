use pretty_assertions::assert_eq;

use super::*;
use crate::testing::{check, codes, fix, registry};

fn declare_codes(source: &str) -> Vec<String> {
    codes(&registry(DeclareStatement::default()), "a.php", source)
}

fn declare_fix(source: &str) -> String {
    fix(&registry(DeclareStatement::default()), "a.php", source).0
}

#[test]
fn well_formed_statement_is_clean() {
    assert!(declare_codes("<?php\ndeclare( strict_types = 1 );\n").is_empty());
    assert!(declare_codes("<?php\ndeclare( encoding = 'UTF-8' );\n").is_empty());
}

#[test]
fn unspaced_statement_reports_each_gap() {
    assert_eq!(
        declare_codes("<?php\ndeclare(strict_types=1);\n"),
        vec![
            "NoSpaceFoundBeforeDirective",
            "NoSpaceFoundAfterDirective",
            "NoSpaceFoundAfterEquals",
            "NoSpaceFoundAfterDirectiveValue",
        ]
    );
}

#[test]
fn unspaced_statement_converges_to_expected_layout() {
    let (text, passes) = fix(
        &registry(DeclareStatement::default()),
        "a.php",
        "<?php\ndeclare(strict_types=1);\n",
    );
    assert_eq!(text, "<?php\ndeclare( strict_types = 1 );\n");
    assert_eq!(passes, 1);
    assert!(declare_codes(&text).is_empty());
}

#[test]
fn extra_spaces_are_collapsed() {
    let source = "<?php\ndeclare (  strict_types   =  1  ) ;\n";
    assert_eq!(
        declare_codes(source),
        vec![
            "SpaceFoundAfterKeyword",
            "TooMuchSpaceFoundBeforeDirective",
            "TooMuchSpaceFoundAfterDirective",
            "TooMuchSpaceFoundBeforeEquals",
            "TooMuchSpaceFoundAfterEquals",
            "TooMuchSpaceFoundBeforeDirectiveValue",
            "TooMuchSpaceFoundAfterDirectiveValue",
            "SpaceFoundAfterClosingParen",
        ]
    );
    assert_eq!(declare_fix(source), "<?php\ndeclare( strict_types = 1 );\n");
}

#[test]
fn multi_line_contents_are_joined() {
    let source = "<?php\ndeclare(\n\tstrict_types = 1 );\n";
    let found = declare_codes(source);
    assert!(found.contains(&"DirectiveOnNewLine".to_owned()));
    assert_eq!(declare_fix(source), "<?php\ndeclare( strict_types = 1 );\n");
}

#[test]
fn directive_casing_and_validity() {
    let report = check(
        &registry(DeclareStatement::default()),
        "a.php",
        "<?php\ndeclare( Strict_Types = 1 );\ndeclare( bogus = 1 );\n",
    );
    let messages: Vec<_> = report.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Directives in a declare statement should be lower case; expected strict_types; found Strict_Types.",
            "Invalid directive found in declare statement; expected one of encoding, strict_types, ticks; found bogus.",
        ]
    );
    assert!(!report.diagnostics[1].fixable);
    assert_eq!(
        declare_fix("<?php\ndeclare( Strict_Types = 1 );\n"),
        "<?php\ndeclare( strict_types = 1 );\n"
    );
}

#[test]
fn custom_valid_directives() {
    let sniff = DeclareStatement {
        valid_directives: vec!["ticks".to_owned()],
    };
    assert_eq!(
        codes(&registry(sniff), "a.php", "<?php\ndeclare( strict_types = 1 );\n"),
        vec!["InvalidDirective"]
    );
}

#[test]
fn block_form_layout() {
    assert!(declare_codes("<?php\ndeclare( ticks = 1 ) {\n\ttick();\n}\n").is_empty());
    assert_eq!(
        declare_fix("<?php\ndeclare( ticks = 1 )\n{\n\ttick();\n}\n"),
        "<?php\ndeclare( ticks = 1 ) {\n\ttick();\n}\n"
    );
    assert_eq!(
        declare_fix("<?php\ndeclare( ticks = 1 ){\n\ttick();\n}\n"),
        "<?php\ndeclare( ticks = 1 ) {\n\ttick();\n}\n"
    );
}

#[test]
fn block_content_and_closing_brace() {
    assert_eq!(
        declare_codes("<?php\ndeclare( ticks = 1 ) { tick(); }\n"),
        vec!["ContentFoundAfterOpeningCurlyBrace", "ClosingBraceWrongLine"]
    );
    assert_eq!(
        declare_fix("<?php\ndeclare( ticks = 1 ) {}\n"),
        "<?php\ndeclare( ticks = 1 ) {\n}\n"
    );
    assert_eq!(
        declare_codes("<?php\ndeclare( ticks = 1 ) {\n\ttick();\n  }\n"),
        vec!["ClosingBraceNotAligned"]
    );
}

#[test]
fn live_coding_is_ignored() {
    assert!(declare_codes("<?php\ndeclare(strict_types=1").is_empty());
    assert!(declare_codes("<?php\ndeclare(").is_empty());
}
