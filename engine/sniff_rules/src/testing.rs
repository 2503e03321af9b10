//! Helpers for running rule modules over source text in tests.

use sniff_diagnostic::{DiagnosticCollector, DiagnosticReport, SeverityOverrides};
use sniff_fixer::Fixer;
use sniff_lexer::{tokenize, LexConfig};

use crate::{Sniff, SniffRegistry};

pub(crate) fn registry(sniff: impl Sniff + 'static) -> SniffRegistry {
    let mut registry = SniffRegistry::new();
    registry.register(Box::new(sniff));
    registry
}

/// Run one non-fixing pass.
pub(crate) fn check(registry: &SniffRegistry, path: &str, source: &str) -> DiagnosticReport {
    let store = tokenize(source, &LexConfig::default());
    let overrides = SeverityOverrides::new();
    let mut collector = DiagnosticCollector::new(&store, &overrides);
    registry
        .process(&store, path, &mut collector, None)
        .unwrap_or_else(|e| panic!("{e}"));
    collector.finish()
}

/// Diagnostic codes of one pass, without the module prefix.
pub(crate) fn codes(registry: &SniffRegistry, path: &str, source: &str) -> Vec<String> {
    check(registry, path, source)
        .diagnostics
        .into_iter()
        .map(|d| d.code.rsplit('.').next().unwrap_or_default().to_owned())
        .collect()
}

/// Fix until a pass applies nothing. Returns the text and the number of
/// passes that applied something.
pub(crate) fn fix(registry: &SniffRegistry, path: &str, source: &str) -> (String, usize) {
    let mut text = source.to_owned();
    for pass in 0..10 {
        let store = tokenize(&text, &LexConfig::default());
        let overrides = SeverityOverrides::new();
        let mut collector = DiagnosticCollector::new(&store, &overrides);
        let mut fixer = Fixer::new(&store);
        registry
            .process(&store, path, &mut collector, Some(&mut fixer))
            .unwrap_or_else(|e| panic!("{e}"));
        let outcome = fixer.apply_all().unwrap_or_else(|e| panic!("{e}"));
        if outcome.applied == 0 {
            return (text, pass);
        }
        text = outcome.text;
    }
    panic!("fixes did not converge:\n{text}");
}
