use super::*;
use pretty_assertions::assert_eq;
use sniff_lexer::{tokenize, LexConfig};

const TOO_LONG: &str = "BigBite.Commenting.DocCommentLineLength.TooLong";

fn store(source: &str) -> TokenStore {
    tokenize(source, &LexConfig::default())
}

#[test]
fn accepts_and_formats() {
    let store = store("<?php\n$a;\n");
    let overrides = SeverityOverrides::new();
    let mut collector = DiagnosticCollector::new(&store, &overrides);
    let accepted = collector
        .report(Severity::Warning, TOO_LONG, 2, "Line exceeds %s characters", &["80"], false)
        .unwrap();
    assert!(accepted);
    let report = collector.finish();
    assert_eq!(report.diagnostics.len(), 1);
    let d = &report.diagnostics[0];
    assert_eq!((d.line, d.column), (2, 1));
    assert_eq!(d.message, "Line exceeds 80 characters");
    assert_eq!(report.counts.warnings, 1);
    assert_eq!(report.counts.by_code.get(TOO_LONG), Some(&1));
}

#[test]
fn same_position_and_code_is_deduplicated() {
    let store = store("<?php\n$a;\n");
    let overrides = SeverityOverrides::new();
    let mut collector = DiagnosticCollector::new(&store, &overrides);
    assert!(collector.report(Severity::Error, "A.B.C.D", 2, "m", &[], true).unwrap());
    assert!(!collector.report(Severity::Error, "A.B.C.D", 2, "m", &[], true).unwrap());
    assert!(collector.report(Severity::Error, "A.B.C.E", 2, "m", &[], true).unwrap());
    assert!(collector.report(Severity::Error, "A.B.C.D", 3, "m", &[], true).unwrap());
    let counts = collector.finish().counts;
    assert_eq!((counts.errors, counts.fixable), (3, 3));
}

#[test]
fn suppressed_reports_are_refused() {
    let store = store("<?php\n// phpcs:disable BigBite.Commenting\n$a;\n");
    let overrides = SeverityOverrides::new();
    let mut collector = DiagnosticCollector::new(&store, &overrides);
    let a = store.iter().position(|t| t.content == "$a").unwrap();
    assert!(!collector.report(Severity::Warning, TOO_LONG, a, "m", &[], false).unwrap());
    assert!(collector.report(Severity::Warning, "BigBite.PHP.Heredoc.NotAllowed", a, "m", &[], false).unwrap());
}

#[test]
fn overrides_change_or_drop_severity() {
    let store = store("<?php\n$a;\n");
    let mut overrides = SeverityOverrides::new();
    overrides.insert("BigBite", SeverityOverride::Warning);
    overrides.insert("BigBite.PHP", SeverityOverride::Off);
    overrides.insert("BigBite.Files.FileName", SeverityOverride::Error);
    let mut collector = DiagnosticCollector::new(&store, &overrides);
    assert!(collector.report(Severity::Error, "BigBite.Files.DeclareStatement.X", 0, "m", &[], false).unwrap());
    assert!(!collector.report(Severity::Error, "BigBite.PHP.Heredoc.NotAllowed", 0, "m", &[], false).unwrap());
    assert!(collector.report(Severity::Warning, "BigBite.Files.FileName.Y", 0, "m", &[], false).unwrap());
    let counts = collector.finish().counts;
    assert_eq!((counts.errors, counts.warnings), (1, 1));
}

#[test]
fn out_of_range_position_is_an_error() {
    let store = store("<?php");
    let overrides = SeverityOverrides::new();
    let mut collector = DiagnosticCollector::new(&store, &overrides);
    let err = collector.report(Severity::Error, "A.B.C.D", 99, "m", &[], false);
    assert_eq!(err, Err(StoreError::OutOfRange { position: 99, len: store.len() }));
}

#[test]
fn metrics_count_once_per_position() {
    let store = store("<?php\n$a;\n$b;\n");
    let overrides = SeverityOverrides::new();
    let mut collector = DiagnosticCollector::new(&store, &overrides);
    collector.record_metric(2, "Line length", "80 or less").unwrap();
    collector.record_metric(2, "Line length", "80 or less").unwrap();
    collector.record_metric(5, "Line length", "100 or less").unwrap();
    let metrics = collector.finish().metrics;
    let line_length = &metrics["Line length"];
    assert_eq!(line_length.get("80 or less"), Some(&1));
    assert_eq!(line_length.get("100 or less"), Some(&1));
}

#[test]
fn finish_sorts_by_location() {
    let store = store("<?php\n$a;\n$b;\n");
    let overrides = SeverityOverrides::new();
    let mut collector = DiagnosticCollector::new(&store, &overrides);
    collector.report(Severity::Error, "A.B.C.D", 5, "late", &[], false).unwrap();
    collector.report(Severity::Error, "A.B.C.D", 2, "early", &[], false).unwrap();
    let messages: Vec<_> = collector.finish().diagnostics.into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["early", "late"]);
}
