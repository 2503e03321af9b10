use pretty_assertions::assert_eq;

use super::*;
use crate::testing::{check, fix, registry};

fn stringable_fix(source: &str) -> String {
    fix(&registry(Stringable), "a.php", source).0
}

#[test]
fn implementing_class_is_clean() {
    let source = "<?php\nclass Foo implements \\Stringable {\n\tpublic function __toString() {}\n}\n\
                  class Bar implements Countable, Stringable {\n\tpublic function __toString() {}\n}\n";
    assert!(check(&registry(Stringable), "a.php", source).diagnostics.is_empty());
}

#[test]
fn other_methods_and_free_functions_are_ignored() {
    let source = "<?php\nclass Foo {\n\tpublic function toString() {}\n}\nfunction __toString() {}\n";
    assert!(check(&registry(Stringable), "a.php", source).diagnostics.is_empty());
}

#[test]
fn missing_interface_is_reported_on_the_class() {
    let source = "<?php\n\nclass Foo {\n\tpublic function __toString() {}\n}\n";
    let report = check(&registry(Stringable), "a.php", source);
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.code, "BigBite.Classes.Stringable.NotImplemented");
    assert_eq!(diagnostic.line, 3);
    assert!(diagnostic.fixable);
}

#[test]
fn fix_adds_implements_clause() {
    assert_eq!(
        stringable_fix("<?php\nclass Foo {\n\tpublic function __toString() {}\n}\n"),
        "<?php\nclass Foo implements \\Stringable {\n\tpublic function __toString() {}\n}\n"
    );
    assert_eq!(
        stringable_fix("<?php\nclass Foo extends Bar\n{\n\tpublic function __toString() {}\n}\n"),
        "<?php\nclass Foo extends Bar implements \\Stringable\n{\n\tpublic function __toString() {}\n}\n"
    );
}

#[test]
fn fix_extends_existing_interface_list() {
    assert_eq!(
        stringable_fix("<?php\nclass Foo implements Countable {\n\tpublic function __toString() {}\n}\n"),
        "<?php\nclass Foo implements Countable, \\Stringable {\n\tpublic function __toString() {}\n}\n"
    );
}

#[test]
fn nested_closure_resolves_to_enclosing_class() {
    let source = "<?php\nclass Foo {\n\tpublic function bar() {\n\t\t$f = function () {};\n\t}\n\
                  \tpublic function __toString() {}\n}\n";
    let report = check(&registry(Stringable), "a.php", source);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].line, 2);
}
