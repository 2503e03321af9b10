//! The `explain` command: describe a rule module.

use sniff_rules::bigbite;

use super::ExitStatus;

/// Text shown for a rule module or diagnostic code, if one matches.
///
/// `code` may be a module code (`BigBite.PHP.Heredoc`) or a diagnostic
/// code (`BigBite.PHP.Heredoc.NotAllowed`).
pub fn explanation(code: &str) -> Option<String> {
    let registry = bigbite::standard();
    let sniff = registry.all().iter().find(|s| {
        code == s.code()
            || code
                .strip_prefix(s.code())
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(|rest| s.codes().contains(&rest))
    })?;

    let mut text = format!("{}\n\n{}\n", sniff.code(), sniff.description());
    if !sniff.codes().is_empty() {
        text.push_str("\nCodes:\n");
        for suffix in sniff.codes() {
            text.push_str(&format!("  {}.{suffix}\n", sniff.code()));
        }
    }
    Some(text)
}

/// Print the documentation of a rule module.
pub fn explain_sniff(code: &str) -> ExitStatus {
    if let Some(text) = explanation(code) {
        print!("{text}");
        return ExitStatus::Clean;
    }
    eprintln!("Unknown sniff code: {code}");
    eprintln!();
    eprintln!("Known sniffs:");
    for known in bigbite::BUILTIN {
        eprintln!("  {known}");
    }
    ExitStatus::Failure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explains_module_and_diagnostic_codes() {
        let text = explanation("BigBite.PHP.Heredoc").unwrap_or_default();
        assert!(text.starts_with("BigBite.PHP.Heredoc\n\nForbids heredoc"));
        assert!(text.contains("  BigBite.PHP.Heredoc.NotAllowed\n"));
        assert_eq!(explanation("BigBite.PHP.Heredoc.NotAllowed"), Some(text));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(explanation("BigBite.PHP.Heredoc.Nope"), None);
        assert_eq!(explanation("BigBite.PHP"), None);
    }
}
