#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the `sniff` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

const TIGHT_DECLARE: &str = "<?php\ndeclare(strict_types=1);\n\necho 'hi';\n";
const SPACED_DECLARE: &str = "<?php\ndeclare( strict_types = 1 );\n\necho 'hi';\n";

fn sniff(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sniff"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("SNIFF_LOG_TREE")
        .output()
        .expect("failed to run sniff")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn check_reports_errors_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.php"), TIGHT_DECLARE).unwrap();

    let output = sniff(dir.path(), &["check", "functions.php"]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(
        text.contains("functions.php:2:9: error[BigBite.Files.DeclareStatement."),
        "{text}"
    );
    assert!(text.contains("can be fixed automatically"), "{text}");
    assert_eq!(fs::read_to_string(dir.path().join("functions.php")).unwrap(), TIGHT_DECLARE);
}

#[test]
fn check_clean_file_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.php"), SPACED_DECLARE).unwrap();

    let output = sniff(dir.path(), &["check", "."]);
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    assert_eq!(stdout(&output), "1 file checked, no problems found\n");
}

#[test]
fn fix_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("functions.php");
    fs::write(&file, TIGHT_DECLARE).unwrap();

    let output = sniff(dir.path(), &["fix", "functions.php"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(fs::read_to_string(&file).unwrap(), SPACED_DECLARE);
    assert!(stderr(&output).contains("functions.php: applied"));
}

#[test]
fn fix_dry_run_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("functions.php");
    fs::write(&file, TIGHT_DECLARE).unwrap();

    let output = sniff(dir.path(), &["fix", "functions.php", "--dry-run"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&file).unwrap(), TIGHT_DECLARE);
    assert!(stderr(&output).contains("would apply"));
}

#[test]
fn json_report_is_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.php"), TIGHT_DECLARE).unwrap();

    let output = sniff(dir.path(), &["check", "functions.php", "--report=json"]);
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["files"][0]["path"], "functions.php");
    assert!(value["totals"]["errors"].as_u64().unwrap() > 0);
    assert_eq!(value["files"][0]["messages"][0]["line"], 2);
}

#[test]
fn ruleset_excludes_module() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.php"), TIGHT_DECLARE).unwrap();
    fs::write(
        dir.path().join("sniff.json"),
        r#"{ "exclude": ["BigBite.Files.DeclareStatement"] }"#,
    )
    .unwrap();

    let output = sniff(dir.path(), &["check", "functions.php"]);
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.php"), SPACED_DECLARE).unwrap();

    let output = sniff(dir.path(), &["check", "functions.php", "--config=nope.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("nope.json"));
}

#[test]
fn unreadable_file_fails_but_others_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("functions.php"), TIGHT_DECLARE).unwrap();

    let output = sniff(dir.path(), &["check", "missing.php", "functions.php"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing.php"));
    assert!(stdout(&output).contains("functions.php:2:9"));
}

#[test]
fn bad_usage_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    for args in [
        &["check"][..],
        &["check", "a.php", "--bogus"],
        &["check", "a.php", "--dry-run"],
        &["fix", "a.php", "--max-passes=0"],
        &["frobnicate"],
        &[],
    ] {
        let output = sniff(dir.path(), args);
        assert_eq!(output.status.code(), Some(2), "{args:?}");
    }
}

#[test]
fn explain_describes_sniff() {
    let dir = tempfile::tempdir().unwrap();
    let output = sniff(dir.path(), &["explain", "BigBite.PHP.Heredoc"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("BigBite.PHP.Heredoc"));

    let output = sniff(dir.path(), &["explain", "BigBite.Nope"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn lex_prints_tokens() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.php"), "<?php echo 1;\n").unwrap();

    let output = sniff(dir.path(), &["lex", "a.php"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("T_OPEN_TAG"), "{text}");
    assert!(text.contains("T_ECHO"), "{text}");
}

#[test]
fn lex_warns_about_byte_order_mark() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.php"), "\u{feff}<?php echo 1;\n").unwrap();

    let output = sniff(dir.path(), &["lex", "a.php"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("a.php: UTF-8 byte-order mark at byte 0"));
}
