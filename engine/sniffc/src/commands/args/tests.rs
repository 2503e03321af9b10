use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn check_options() {
    let options = CliOptions::parse(
        &args(&["src", "--config=ruleset.json", "--report=json", "--tab-width=2", "a.php"]),
        false,
    )
    .unwrap();
    assert_eq!(
        options,
        CliOptions {
            paths: vec![PathBuf::from("src"), PathBuf::from("a.php")],
            config: Some(PathBuf::from("ruleset.json")),
            report: ReportFormat::Json,
            tab_width: Some(2),
            max_passes: None,
            dry_run: false,
        }
    );
}

#[test]
fn fix_only_options() {
    let options = CliOptions::parse(&args(&["a.php", "--max-passes=3", "--dry-run"]), true).unwrap();
    assert_eq!(options.max_passes, Some(3));
    assert!(options.dry_run);

    let err = CliOptions::parse(&args(&["a.php", "--dry-run"]), false).unwrap_err();
    assert_eq!(err.to_string(), "unknown option '--dry-run'");
}

#[test]
fn bad_values_are_usage_errors() {
    assert_eq!(
        CliOptions::parse(&args(&["a.php", "--tab-width=wide"]), false).unwrap_err(),
        UsageError("--tab-width expects a number, found 'wide'".to_owned())
    );
    assert!(CliOptions::parse(&args(&["a.php", "--report=xml"]), false).is_err());
    assert!(CliOptions::parse(&args(&["a.php", "--max-passes=0"]), true).is_err());
    assert_eq!(
        CliOptions::parse(&args(&["--report=full"]), false).unwrap_err().to_string(),
        "no files given"
    );
}
