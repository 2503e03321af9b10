//! The `lex` command: dump the token stream of a file.

use std::fmt::Write;

use sniff_ir::TokenStore;
use sniff_lexer::{encoding_issues, tokenize, EncodingIssueKind, LexConfig};

use super::ExitStatus;

/// One line per token: position, location, kind, content and links.
pub fn format_tokens(store: &TokenStore) -> String {
    let mut out = String::new();
    for (position, token) in store.iter().enumerate() {
        let _ = write!(
            out,
            "{position:>5}  {:>4}:{:<4} {:<28} {:?}",
            token.line,
            token.column,
            token.kind.to_string(),
            token.content
        );
        let links = &token.links;
        if let (Some(opener), Some(closer)) = (links.scope_opener, links.scope_closer) {
            let _ = write!(out, "  scope {opener}..{closer}");
        }
        if let (Some(opener), Some(closer)) = (links.parenthesis_opener, links.parenthesis_closer)
        {
            let _ = write!(out, "  paren {opener}..{closer}");
        }
        if let Some(closer) = links.comment_closer {
            let _ = write!(out, "  comment ..{closer}");
        }
        out.push('\n');
    }
    out
}

/// One warning line per byte-order mark or null byte in `source`.
pub fn format_encoding_issues(path: &str, source: &str) -> String {
    let mut out = String::new();
    for issue in encoding_issues(source) {
        let what = match issue.kind {
            EncodingIssueKind::Utf8Bom => "UTF-8 byte-order mark",
            EncodingIssueKind::InteriorNull => "null byte",
        };
        let _ = writeln!(out, "warning: {path}: {what} at byte {}", issue.pos);
    }
    out
}

/// Tokenize a file and print its tokens.
///
/// Encoding problems the tokenizer passes through as content are listed
/// on stderr first.
pub fn lex_file(path: &str, tab_width: u32) -> ExitStatus {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            return ExitStatus::Failure;
        }
    };
    eprint!("{}", format_encoding_issues(path, &source));
    let store = tokenize(&source, &LexConfig { tab_width });
    println!("Tokens for '{path}' ({} tokens):", store.len());
    print!("{}", format_tokens(&store));
    ExitStatus::Clean
}
