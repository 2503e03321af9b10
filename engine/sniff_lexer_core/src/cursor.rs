//! Cursor over a sentinel-terminated buffer.
//!
//! EOF is the sentinel (`0x00`) at a position at or past the source length.
//! A null byte before that point is an interior null and is reported by the
//! scanner as an unknown byte rather than as EOF.

/// Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`], so lookahead that may need to backtrack simply
/// scans a copy.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00` padding.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(buf.len() > source_len as usize, "buffer must carry a sentinel");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.buf.get(pos as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Jump straight to the end of the source.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.pos = self.source_len;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Unscanned source bytes from the current position.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let start = (self.pos.min(self.source_len)) as usize;
        &self.buf[start..self.source_len as usize]
    }

    /// Whether the unscanned input starts with `needle`.
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        self.rest().starts_with(needle)
    }

    /// Whether the unscanned input starts with `needle`, ignoring ASCII case.
    pub fn starts_with_ignore_case(&self, needle: &[u8]) -> bool {
        let rest = self.rest();
        rest.len() >= needle.len() && rest[..needle.len()].eq_ignore_ascii_case(needle)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false` so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance past spaces and tabs.
    #[inline]
    pub fn eat_horizontal_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    /// Consume one line break (`\n`, `\r\n` or a lone `\r`).
    ///
    /// Returns `false` if the cursor is not at a line break.
    pub fn eat_line_break(&mut self) -> bool {
        match self.current() {
            b'\n' => {
                self.advance();
                true
            }
            b'\r' => {
                self.advance();
                if self.current() == b'\n' {
                    self.advance();
                }
                true
            }
            _ => false,
        }
    }

    /// Advance to the first occurrence of `needle`, leaving the cursor on it.
    ///
    /// Returns `false` and moves to EOF when `needle` does not occur.
    pub fn eat_until(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.rest(), needle) {
            Some(offset) => {
                self.advance_n(offset as u32);
                true
            }
            None => {
                self.advance_to_end();
                false
            }
        }
    }

    /// Advance to the end of a single-line comment.
    ///
    /// Stops before `\n`, `\r`, or a `?>` close tag, whichever comes first.
    pub fn eat_line_comment_body(&mut self) {
        loop {
            let rest = self.rest();
            match memchr::memchr3(b'\n', b'\r', b'?', rest) {
                Some(offset) => {
                    self.advance_n(offset as u32);
                    if self.current() != b'?' || self.peek() == b'>' {
                        return;
                    }
                    self.advance();
                }
                None => {
                    self.advance_to_end();
                    return;
                }
            }
        }
    }

    /// Advance past a quoted literal body up to and including `quote`.
    ///
    /// A backslash escapes the following byte. Returns `false` when the
    /// literal is unterminated (cursor left at EOF).
    pub fn eat_quoted(&mut self, quote: u8) -> bool {
        loop {
            let rest = self.rest();
            match memchr::memchr2(quote, b'\\', rest) {
                Some(offset) => {
                    self.advance_n(offset as u32);
                    if self.current() == b'\\' {
                        self.advance();
                        if !self.is_eof() {
                            self.advance();
                        }
                    } else {
                        self.advance();
                        return true;
                    }
                }
                None => {
                    self.advance_to_end();
                    return false;
                }
            }
        }
    }

    /// Source substring between two byte offsets.
    ///
    /// Offsets must lie on UTF-8 boundaries, which holds for every boundary
    /// the scanner produces since it only stops on ASCII bytes.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or_default()
    }
}

/// First byte of a PHP identifier.
#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

/// Subsequent byte of a PHP identifier.
#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

#[cfg(test)]
mod tests;
