//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner is a small state machine over three modes: inline HTML,
//! PHP code, and heredoc/nowdoc bodies. Each call to
//! [`RawScanner::next_token`] advances the cursor past exactly one token.
//!
//! # Live coding
//!
//! Nothing here fails. An unterminated comment, string or heredoc becomes a
//! single token that runs to end of input, and bytes that start no token
//! become one-byte [`RawTag::Unknown`] tokens.

use crate::cursor::{is_ident_continue, is_ident_start, Cursor};
use crate::tag::{RawTag, RawToken};

/// Mode the scanner starts in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Outside PHP tags; text is inline HTML until an open tag.
    Html,
    /// Inside PHP code.
    Code,
}

/// Pick the starting mode for a source.
///
/// A source with no `<?php` or `<?=` open tag anywhere is treated as a code
/// snippet and scanned as PHP from its first byte.
pub fn initial_mode(source: &[u8]) -> ScanMode {
    let has_open_tag =
        memchr::memmem::find_iter(source, b"<?").any(|at| is_open_tag(&source[at..]));
    if has_open_tag {
        ScanMode::Html
    } else {
        ScanMode::Code
    }
}

/// `<?=`, or `<?php` followed by whitespace or end of input.
fn is_open_tag(bytes: &[u8]) -> bool {
    if bytes.starts_with(b"<?=") {
        return true;
    }
    bytes.len() >= 5
        && bytes[..5].eq_ignore_ascii_case(b"<?php")
        && bytes.get(5).map_or(true, u8::is_ascii_whitespace)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Html,
    Code,
    Heredoc,
}

/// Scanner over a sentinel-terminated [`Cursor`].
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    state: State,
    /// Closing label of the heredoc currently being scanned.
    heredoc_label: Vec<u8>,
    /// The body has been emitted and the cursor sits on the closing label.
    heredoc_end_next: bool,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>, mode: ScanMode) -> Self {
        let state = match mode {
            ScanMode::Html => State::Html,
            ScanMode::Code => State::Code,
        };
        Self {
            cursor,
            state,
            heredoc_label: Vec::new(),
            heredoc_end_next: false,
        }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` once the source is exhausted,
    /// and keeps returning it on subsequent calls.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.state {
            State::Html => self.inline_html(start),
            State::Heredoc => self.heredoc(start),
            State::Code => self.code(start),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Consume `n` bytes and emit `tag`.
    #[inline]
    fn fixed(&mut self, start: u32, n: u32, tag: RawTag) -> RawToken {
        self.cursor.advance_n(n);
        self.token(tag, start)
    }

    // ─── Inline HTML ───────────────────────────────────────────

    fn inline_html(&mut self, start: u32) -> RawToken {
        if let Some(tok) = self.open_tag(start) {
            return tok;
        }

        let rest = self.cursor.rest();
        let mut from = 1;
        loop {
            match memchr::memmem::find(&rest[from..], b"<?") {
                Some(offset) => {
                    let at = from + offset;
                    if is_open_tag(&rest[at..]) {
                        self.cursor.advance_n(at as u32);
                        return self.token(RawTag::InlineHtml, start);
                    }
                    from = at + 2;
                }
                None => {
                    self.cursor.advance_to_end();
                    return self.token(RawTag::InlineHtml, start);
                }
            }
        }
    }

    fn open_tag(&mut self, start: u32) -> Option<RawToken> {
        if self.cursor.starts_with(b"<?=") {
            self.state = State::Code;
            return Some(self.fixed(start, 3, RawTag::OpenTagWithEcho));
        }
        if is_open_tag(self.cursor.rest()) {
            self.state = State::Code;
            return Some(self.fixed(start, 5, RawTag::OpenTag));
        }
        None
    }

    // ─── Heredoc ───────────────────────────────────────────────

    fn heredoc(&mut self, start: u32) -> RawToken {
        let label_len = self.heredoc_label.len() as u32;
        if self.heredoc_end_next {
            self.heredoc_end_next = false;
            self.state = State::Code;
            return self.fixed(start, label_len, RawTag::HeredocEnd);
        }

        // Invariant: the cursor sits at the start of a line.
        loop {
            let mut probe = self.cursor;
            probe.eat_horizontal_whitespace();
            let after_label = probe.rest().get(self.heredoc_label.len()).copied();
            if probe.starts_with(&self.heredoc_label)
                && !after_label.is_some_and(is_ident_continue)
            {
                self.cursor = probe;
                if probe.pos() > start {
                    self.heredoc_end_next = true;
                    return self.token(RawTag::HeredocBody, start);
                }
                self.state = State::Code;
                return self.fixed(start, label_len, RawTag::HeredocEnd);
            }

            match memchr::memchr2(b'\n', b'\r', self.cursor.rest()) {
                Some(offset) => {
                    self.cursor.advance_n(offset as u32);
                    self.cursor.eat_line_break();
                    if self.cursor.is_eof() {
                        self.state = State::Code;
                        return self.token(RawTag::HeredocBody, start);
                    }
                }
                None => {
                    self.cursor.advance_to_end();
                    self.state = State::Code;
                    return self.token(RawTag::HeredocBody, start);
                }
            }
        }
    }

    /// Try `<<<LABEL`, `<<<"LABEL"` or `<<<'LABEL'` followed by a line break.
    fn heredoc_start(&mut self, start: u32) -> Option<RawToken> {
        let mut probe = self.cursor;
        probe.advance_n(3);
        probe.eat_horizontal_whitespace();

        let quote = match probe.current() {
            q @ (b'\'' | b'"') => {
                probe.advance();
                Some(q)
            }
            _ => None,
        };
        if !is_ident_start(probe.current()) {
            return None;
        }
        let label_start = probe.pos();
        probe.eat_while(is_ident_continue);
        let label_end = probe.pos();
        if let Some(q) = quote {
            if probe.current() != q {
                return None;
            }
            probe.advance();
        }
        if !probe.eat_line_break() {
            return None;
        }

        self.heredoc_label = probe.slice(label_start, label_end).as_bytes().to_vec();
        self.heredoc_end_next = false;
        self.cursor = probe;
        self.state = State::Heredoc;
        Some(self.token(RawTag::HeredocStart, start))
    }

    // ─── PHP Code ──────────────────────────────────────────────

    fn code(&mut self, start: u32) -> RawToken {
        match self.cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' => self.whitespace(start),
            b if is_ident_start(b) => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'$' => self.dollar(start),
            b'\'' => self.quoted(start, b'\'', RawTag::SingleQuoted),
            b'"' => self.quoted(start, b'"', RawTag::DoubleQuoted),
            b'`' => self.quoted(start, b'`', RawTag::Backtick),
            b'/' => self.slash_or_comment(start),
            b'#' => self.hash(start),
            b'?' => self.question(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'.' => self.dot(start),
            b'+' => self.pick(start, &[("++", RawTag::Increment), ("+=", RawTag::PlusEqual)], RawTag::Plus),
            b'-' => self.pick(
                start,
                &[
                    ("--", RawTag::Decrement),
                    ("-=", RawTag::MinusEqual),
                    ("->", RawTag::Arrow),
                ],
                RawTag::Minus,
            ),
            b'*' => self.pick(
                start,
                &[
                    ("**=", RawTag::PowEqual),
                    ("**", RawTag::Pow),
                    ("*=", RawTag::StarEqual),
                ],
                RawTag::Star,
            ),
            b'%' => self.pick(start, &[("%=", RawTag::PercentEqual)], RawTag::Percent),
            b'&' => self.pick(start, &[("&&", RawTag::AmpAmp), ("&=", RawTag::AmpEqual)], RawTag::Amp),
            b'|' => self.pick(start, &[("||", RawTag::PipePipe), ("|=", RawTag::PipeEqual)], RawTag::Pipe),
            b'^' => self.pick(start, &[("^=", RawTag::CaretEqual)], RawTag::Caret),
            b':' => self.pick(start, &[("::", RawTag::DoubleColon)], RawTag::Colon),
            b'~' => self.fixed(start, 1, RawTag::Tilde),
            b'@' => self.fixed(start, 1, RawTag::At),
            b',' => self.fixed(start, 1, RawTag::Comma),
            b';' => self.fixed(start, 1, RawTag::Semicolon),
            b'(' => self.fixed(start, 1, RawTag::LeftParen),
            b')' => self.fixed(start, 1, RawTag::RightParen),
            b'[' => self.fixed(start, 1, RawTag::LeftBracket),
            b']' => self.fixed(start, 1, RawTag::RightBracket),
            b'{' => self.fixed(start, 1, RawTag::LeftBrace),
            b'}' => self.fixed(start, 1, RawTag::RightBrace),
            b'\\' => self.fixed(start, 1, RawTag::Backslash),
            _ => self.fixed(start, 1, RawTag::Unknown),
        }
    }

    /// Longest-match selection among fixed spellings, longest listed first.
    fn pick(&mut self, start: u32, options: &[(&str, RawTag)], fallback: RawTag) -> RawToken {
        for &(text, tag) in options {
            if self.cursor.starts_with(text.as_bytes()) {
                return self.fixed(start, text.len() as u32, tag);
            }
        }
        self.fixed(start, 1, fallback)
    }

    // ─── Whitespace & Comments ─────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_horizontal_whitespace();
        self.cursor.eat_line_break();
        self.token(RawTag::Whitespace, start)
    }

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_line_comment_body();
                self.token(RawTag::LineComment, start)
            }
            b'*' => self.block_comment(start),
            b'=' => self.fixed(start, 2, RawTag::SlashEqual),
            _ => self.fixed(start, 1, RawTag::Slash),
        }
    }

    fn block_comment(&mut self, start: u32) -> RawToken {
        let is_doc = self.cursor.peek2() == b'*' && self.cursor.rest().get(3) != Some(&b'/');
        self.cursor.advance_n(2);
        let closed = self.cursor.eat_until(b"*/");
        if closed {
            self.cursor.advance_n(2);
        }
        let tag = match (is_doc, closed) {
            (true, true) => RawTag::DocComment,
            (false, true) => RawTag::BlockComment,
            (true, false) => RawTag::UnterminatedDocComment,
            (false, false) => RawTag::UnterminatedBlockComment,
        };
        self.token(tag, start)
    }

    fn hash(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'[' {
            return self.fixed(start, 2, RawTag::AttributeOpen);
        }
        self.cursor.advance();
        self.cursor.eat_line_comment_body();
        self.token(RawTag::LineComment, start)
    }

    // ─── Names & Literals ──────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.token(RawTag::Ident, start)
    }

    fn dollar(&mut self, start: u32) -> RawToken {
        if is_ident_start(self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.eat_while(is_ident_continue);
            return self.token(RawTag::Variable, start);
        }
        self.fixed(start, 1, RawTag::Dollar)
    }

    fn quoted(&mut self, start: u32, quote: u8, tag: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.eat_quoted(quote) {
            self.token(tag, start)
        } else {
            self.token(RawTag::UnterminatedString, start)
        }
    }

    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0' {
            let radix_digits: Option<fn(u8) -> bool> = match self.cursor.peek() {
                b'x' | b'X' => Some(is_hex_digit),
                b'b' | b'B' => Some(is_bin_digit),
                b'o' | b'O' => Some(is_oct_digit),
                _ => None,
            };
            if let Some(digits) = radix_digits {
                self.cursor.advance_n(2);
                self.cursor.eat_while(digits);
                return self.token(RawTag::Int, start);
            }
        }

        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        let mut tag = RawTag::Int;
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            tag = RawTag::Float;
        }
        if self.eat_exponent() {
            tag = RawTag::Float;
        }
        self.token(tag, start)
    }

    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let signed = matches!(self.cursor.peek(), b'+' | b'-');
        let first_digit = if signed {
            self.cursor.peek2()
        } else {
            self.cursor.peek()
        };
        if !first_digit.is_ascii_digit() {
            return false;
        }
        self.cursor.advance_n(if signed { 2 } else { 1 });
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        true
    }

    // ─── Operators ─────────────────────────────────────────────

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            self.eat_exponent();
            return self.token(RawTag::Float, start);
        }
        self.pick(
            start,
            &[("...", RawTag::Ellipsis), (".=", RawTag::DotEqual)],
            RawTag::Dot,
        )
    }

    fn question(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'>' {
            self.state = State::Html;
            return self.fixed(start, 2, RawTag::CloseTag);
        }
        self.pick(
            start,
            &[
                ("?->", RawTag::NullsafeArrow),
                ("??=", RawTag::CoalesceEqual),
                ("??", RawTag::Coalesce),
            ],
            RawTag::Question,
        )
    }

    fn less(&mut self, start: u32) -> RawToken {
        if self.cursor.starts_with(b"<<<") {
            if let Some(tok) = self.heredoc_start(start) {
                return tok;
            }
        }
        self.pick(
            start,
            &[
                ("<<=", RawTag::ShiftLeftEqual),
                ("<=>", RawTag::Spaceship),
                ("<<", RawTag::ShiftLeft),
                ("<=", RawTag::LessEqual),
                ("<>", RawTag::NotEqual),
            ],
            RawTag::Less,
        )
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.pick(
            start,
            &[
                (">>=", RawTag::ShiftRightEqual),
                (">>", RawTag::ShiftRight),
                (">=", RawTag::GreaterEqual),
            ],
            RawTag::Greater,
        )
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.pick(
            start,
            &[
                ("===", RawTag::Identical),
                ("==", RawTag::EqualEqual),
                ("=>", RawTag::DoubleArrow),
            ],
            RawTag::Equal,
        )
    }

    fn bang(&mut self, start: u32) -> RawToken {
        self.pick(
            start,
            &[("!==", RawTag::NotIdentical), ("!=", RawTag::NotEqual)],
            RawTag::Bang,
        )
    }
}

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit() || b == b'_'
}

fn is_bin_digit(b: u8) -> bool {
    b == b'0' || b == b'1' || b == b'_'
}

fn is_oct_digit(b: u8) -> bool {
    (b'0'..=b'7').contains(&b) || b == b'_'
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        (tok.tag != RawTag::Eof).then_some(tok)
    }
}

#[cfg(test)]
mod tests;
