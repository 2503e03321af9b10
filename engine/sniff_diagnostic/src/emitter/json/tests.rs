use super::*;
use crate::Severity;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic {
        severity: Severity::Error,
        code: "BigBite.PHP.Heredoc.NotAllowed".to_owned(),
        message: "Use of heredoc syntax (\"<<<\") is not allowed".to_owned(),
        position: 3,
        line: 2,
        column: 6,
        fixable: false,
    }
}

fn render(files: &[(&str, Vec<Diagnostic>)]) -> serde_json::Value {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    let mut counts = Counts::default();
    for (path, diagnostics) in files {
        emitter.begin_file(path);
        emitter.emit_all(diagnostics);
        emitter.end_file();
        counts.errors += diagnostics.len();
    }
    emitter.emit_summary(&counts, files.len());
    emitter.flush();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_json_emitter() {
    let value = render(&[("src/a.php", vec![sample_diagnostic()])]);
    let message = &value["files"][0]["messages"][0];
    assert_eq!(value["files"][0]["path"], "src/a.php");
    assert_eq!(message["code"], "BigBite.PHP.Heredoc.NotAllowed");
    assert_eq!(message["severity"], "error");
    assert_eq!(message["line"], 2);
    assert_eq!(message["fixable"], false);
    assert_eq!(
        message["message"],
        "Use of heredoc syntax (\"<<<\") is not allowed"
    );
    assert_eq!(value["totals"]["errors"], 1);
}

#[test]
fn test_json_emitter_multiple_files() {
    let value = render(&[
        ("a.php", vec![sample_diagnostic(), sample_diagnostic()]),
        ("clean.php", vec![]),
    ]);
    assert_eq!(value["files"][0]["messages"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["files"][1]["messages"].as_array().map(Vec::len), Some(0));
    assert_eq!(value["totals"]["files"], 2);
}

#[test]
fn test_json_emitter_no_files() {
    let value = render(&[]);
    assert_eq!(value["files"].as_array().map(Vec::len), Some(0));
    assert_eq!(value["totals"]["errors"], 0);
}
