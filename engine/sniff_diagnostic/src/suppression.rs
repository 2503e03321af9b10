//! Inline suppression directives.
//!
//! Built once per pass from the directive tokens in a [`TokenStore`]:
//!
//! - `phpcs:disable [codes]` suppresses from the directive onward, until a
//!   `phpcs:enable` naming the same code or a broader prefix (or no code).
//!   A narrower enable leaves the broader disable in force.
//! - `phpcs:ignore [codes]` suppresses one line: its own line when code
//!   precedes it there, otherwise the next line.
//! - `phpcs:ignoreFile` suppresses everything.
//!
//! An empty code list means every code. Codes match by whole dotted segment:
//! `BigBite.Files` covers `BigBite.Files.FileName.InvalidClassFileName` but
//! not `BigBite.FilesExtra`.

use sniff_ir::{Token, TokenKind, TokenStore};

/// Whether `prefix` covers `code` by whole dotted segments.
pub fn code_matches(prefix: &str, code: &str) -> bool {
    code.len() >= prefix.len()
        && code.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
        && (code.len() == prefix.len() || code.as_bytes()[prefix.len()] == b'.')
}

fn any_matches(prefixes: &[String], code: &str) -> bool {
    prefixes.iter().any(|p| code_matches(p, code))
}

/// Disable/enable state after a directive.
///
/// A list of disabled prefixes; the empty prefix stands for every code.
/// An enable removes the entries its codes cover, so it resumes a disable
/// of the same or a narrower scope and never a broader one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct State {
    disabled: Vec<String>,
}

/// Whether a disabled prefix covers `code`; the empty prefix covers all.
fn covers(prefix: &str, code: &str) -> bool {
    prefix.is_empty() || code_matches(prefix, code)
}

impl State {
    fn disable(&mut self, codes: &[String]) {
        if codes.is_empty() {
            self.disabled.push(String::new());
        } else {
            self.disabled.extend(codes.iter().cloned());
        }
    }

    fn enable(&mut self, codes: &[String]) {
        if codes.is_empty() {
            self.disabled.clear();
        } else {
            self.disabled
                .retain(|d| d.is_empty() || !any_matches(codes, d));
        }
    }

    fn suppresses(&self, code: &str) -> bool {
        self.disabled.iter().any(|d| covers(d, code))
    }
}

/// Suppression directives of one token stream.
#[derive(Clone, Debug, Default)]
pub struct Suppressions {
    ignore_file: bool,
    /// State in effect after each disable/enable directive, by position.
    ranges: Vec<(usize, State)>,
    /// Lines silenced by `phpcs:ignore`, with their codes.
    lines: Vec<(u32, Vec<String>)>,
}

impl Suppressions {
    pub fn from_store(store: &TokenStore) -> Self {
        let mut out = Suppressions::default();
        let mut state = State::default();
        for (position, token) in store.iter().enumerate() {
            let codes = || token.directive_codes().unwrap_or_default();
            match token.kind {
                TokenKind::PhpcsIgnoreFile => out.ignore_file = true,
                TokenKind::PhpcsDisable => {
                    state.disable(codes());
                    out.ranges.push((position, state.clone()));
                }
                TokenKind::PhpcsEnable => {
                    state.enable(codes());
                    out.ranges.push((position, state.clone()));
                }
                TokenKind::PhpcsIgnore => {
                    let line = if trails_code(store.tokens(), position) {
                        token.line
                    } else {
                        token.line + 1
                    };
                    out.lines.push((line, codes().to_vec()));
                }
                _ => {}
            }
        }
        out
    }

    /// The whole file is silenced by `phpcs:ignoreFile`.
    pub fn ignores_file(&self) -> bool {
        self.ignore_file
    }

    /// Whether a diagnostic with `code` at `position` on `line` is silenced.
    pub fn suppresses(&self, code: &str, position: usize, line: u32) -> bool {
        if self.ignore_file {
            return true;
        }
        let active = self.ranges.partition_point(|(at, _)| *at < position);
        if active > 0 && self.ranges[active - 1].1.suppresses(code) {
            return true;
        }
        self.lines
            .iter()
            .any(|(l, codes)| *l == line && (codes.is_empty() || any_matches(codes, code)))
    }

    /// Whether `code` is still disabled after the last directive of the
    /// file. Rules that report once per file at position 0 use this.
    pub fn disabled_at_end(&self, code: &str) -> bool {
        self.ignore_file || self.ranges.last().is_some_and(|(_, state)| state.suppresses(code))
    }
}

/// Whether non-trivia code precedes the token at `position` on its line.
fn trails_code(tokens: &[Token], position: usize) -> bool {
    let line = tokens[position].line;
    tokens[..position]
        .iter()
        .rev()
        .take_while(|t| t.line == line)
        .any(|t| !t.is_empty_token() && t.kind != TokenKind::OpenTag && t.kind != TokenKind::InlineHtml)
}
