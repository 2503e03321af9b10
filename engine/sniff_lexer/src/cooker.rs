//! Token cooking layer.
//!
//! Transforms the `(RawTag, start, end)` stream from the raw scanner into
//! [`Token`]s with PHP token kinds.
//!
//! ```text
//! source → RawScanner → RawSpan → TokenCooker → Vec<Token>
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup, unless the identifier is a member,
//!   function or constant name
//! - **Comments**: directive detection, doc-comment splitting, one token
//!   per line for block comments
//! - **Strings, heredocs, inline HTML**: one token per line
//!
//! Positions, levels and scope links are filled in by later passes.

use sniff_ir::{Span, Token, TokenKind, EMPTY_TOKENS};
use sniff_lexer_core::RawTag;

use crate::{directives, doc_comment, keywords};

/// A raw token with its absolute byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawSpan {
    pub tag: RawTag,
    pub start: u32,
    pub end: u32,
}

/// Cooks raw tokens into [`Token`]s.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    raw: &'src [RawSpan],
    tokens: Vec<Token>,
    /// The heredoc being cooked was opened with a quoted label.
    nowdoc: bool,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str, raw: &'src [RawSpan]) -> Self {
        Self {
            source,
            raw,
            tokens: Vec::with_capacity(raw.len() + 1),
            nowdoc: false,
        }
    }

    /// Cook every raw token and append the zero-width `Eof`.
    pub(crate) fn cook_all(mut self) -> Vec<Token> {
        for index in 0..self.raw.len() {
            self.cook(index);
        }
        let end = self.raw.last().map_or(0, |r| r.end);
        self.tokens.push(Token::new(TokenKind::Eof, "", Span::point(end)));
        self.tokens
    }

    fn cook(&mut self, index: usize) {
        let RawSpan { tag, start, end } = self.raw[index];
        let text = &self.source[start as usize..end as usize];
        let kind = match tag {
            // Markup
            RawTag::InlineHtml => return self.per_line(TokenKind::InlineHtml, start, text),
            RawTag::OpenTag => TokenKind::OpenTag,
            RawTag::OpenTagWithEcho => TokenKind::OpenTagWithEcho,
            RawTag::CloseTag => TokenKind::CloseTag,

            // Trivia
            RawTag::Whitespace => TokenKind::Whitespace,
            RawTag::LineComment => return self.comment(start, text),
            RawTag::BlockComment => {
                if text.contains(['\n', '\r']) {
                    return self.per_line(TokenKind::Comment, start, text);
                }
                return self.comment(start, text);
            }
            RawTag::UnterminatedBlockComment => TokenKind::Comment,
            RawTag::DocComment => return self.doc_comment(start, text, true),
            RawTag::UnterminatedDocComment => return self.doc_comment(start, text, false),

            // Names and literals
            RawTag::Ident => self.identifier(index, text),
            RawTag::Variable => TokenKind::Variable,
            RawTag::Int => TokenKind::LNumber,
            RawTag::Float => TokenKind::DNumber,
            RawTag::SingleQuoted => {
                return self.per_line(TokenKind::ConstantEncapsedString, start, text)
            }
            RawTag::DoubleQuoted => {
                return self.per_line(double_quoted_kind(text), start, text);
            }
            RawTag::Backtick => return self.per_line(TokenKind::Backtick, start, text),
            RawTag::UnterminatedString => {
                let kind = match text.as_bytes().first() {
                    Some(b'`') => TokenKind::Backtick,
                    Some(b'"') => double_quoted_kind(text),
                    _ => TokenKind::ConstantEncapsedString,
                };
                return self.per_line(kind, start, text);
            }
            RawTag::HeredocStart => {
                self.nowdoc = text.contains('\'');
                if self.nowdoc {
                    TokenKind::StartNowdoc
                } else {
                    TokenKind::StartHeredoc
                }
            }
            RawTag::HeredocBody => {
                let kind = if self.nowdoc {
                    TokenKind::Nowdoc
                } else {
                    TokenKind::Heredoc
                };
                return self.per_line(kind, start, text);
            }
            RawTag::HeredocEnd => {
                if self.nowdoc {
                    TokenKind::EndNowdoc
                } else {
                    TokenKind::EndHeredoc
                }
            }

            // Delimiters
            RawTag::LeftParen => TokenKind::OpenParenthesis,
            RawTag::RightParen => TokenKind::CloseParenthesis,
            RawTag::LeftBracket => TokenKind::OpenSquareBracket,
            RawTag::RightBracket => TokenKind::CloseSquareBracket,
            RawTag::LeftBrace => TokenKind::OpenCurlyBracket,
            RawTag::RightBrace => TokenKind::CloseCurlyBracket,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Backslash => TokenKind::NsSeparator,
            RawTag::AttributeOpen => TokenKind::Attribute,

            // Operators
            RawTag::Colon => TokenKind::Colon,
            RawTag::DoubleColon => TokenKind::DoubleColon,
            RawTag::Question => TokenKind::InlineThen,
            RawTag::NullsafeArrow => TokenKind::NullsafeObjectOperator,
            RawTag::Coalesce => TokenKind::Coalesce,
            RawTag::CoalesceEqual => TokenKind::CoalesceEqual,
            RawTag::Arrow => TokenKind::ObjectOperator,
            RawTag::DoubleArrow => TokenKind::DoubleArrow,
            RawTag::Equal => TokenKind::Equal,
            RawTag::EqualEqual => TokenKind::IsEqual,
            RawTag::Identical => TokenKind::IsIdentical,
            RawTag::NotEqual => TokenKind::IsNotEqual,
            RawTag::NotIdentical => TokenKind::IsNotIdentical,
            RawTag::Less => TokenKind::LessThan,
            RawTag::LessEqual => TokenKind::IsSmallerOrEqual,
            RawTag::Greater => TokenKind::GreaterThan,
            RawTag::GreaterEqual => TokenKind::IsGreaterOrEqual,
            RawTag::Spaceship => TokenKind::Spaceship,
            RawTag::Plus => TokenKind::Plus,
            RawTag::PlusEqual => TokenKind::PlusEqual,
            RawTag::Increment => TokenKind::Inc,
            RawTag::Minus => TokenKind::Minus,
            RawTag::MinusEqual => TokenKind::MinusEqual,
            RawTag::Decrement => TokenKind::Dec,
            RawTag::Star => TokenKind::Multiply,
            RawTag::StarEqual => TokenKind::MulEqual,
            RawTag::Pow => TokenKind::Pow,
            RawTag::PowEqual => TokenKind::PowEqual,
            RawTag::Slash => TokenKind::Divide,
            RawTag::SlashEqual => TokenKind::DivEqual,
            RawTag::Percent => TokenKind::Modulus,
            RawTag::PercentEqual => TokenKind::ModEqual,
            RawTag::Dot => TokenKind::StringConcat,
            RawTag::DotEqual => TokenKind::ConcatEqual,
            RawTag::Ellipsis => TokenKind::Ellipsis,
            RawTag::Bang => TokenKind::BooleanNot,
            RawTag::Amp => TokenKind::BitwiseAnd,
            RawTag::AmpAmp => TokenKind::BooleanAnd,
            RawTag::AmpEqual => TokenKind::AndEqual,
            RawTag::Pipe => TokenKind::BitwiseOr,
            RawTag::PipePipe => TokenKind::BooleanOr,
            RawTag::PipeEqual => TokenKind::OrEqual,
            RawTag::Caret => TokenKind::BitwiseXor,
            RawTag::CaretEqual => TokenKind::XorEqual,
            RawTag::Tilde => TokenKind::BitwiseNot,
            RawTag::ShiftLeft => TokenKind::Sl,
            RawTag::ShiftLeftEqual => TokenKind::SlEqual,
            RawTag::ShiftRight => TokenKind::Sr,
            RawTag::ShiftRightEqual => TokenKind::SrEqual,
            RawTag::At => TokenKind::Asperand,
            RawTag::Dollar => TokenKind::Dollar,

            // Control
            RawTag::Unknown => TokenKind::Unknown,
            RawTag::Eof => return,
        };
        self.push(kind, start, text);
    }

    #[inline]
    fn push(&mut self, kind: TokenKind, start: u32, text: &str) -> &mut Token {
        let end = start + len_u32(text);
        self.tokens.push(Token::new(kind, text, Span::new(start, end)));
        let last = self.tokens.len() - 1;
        &mut self.tokens[last]
    }

    /// One token of `kind` per line of `text`, each keeping its line break.
    fn per_line(&mut self, kind: TokenKind, start: u32, text: &str) {
        let mut at = start;
        for line in lines(text) {
            self.push(kind, at, line);
            at += len_u32(line);
        }
    }

    /// A single-line comment: a suppression directive or a plain comment.
    fn comment(&mut self, start: u32, text: &str) {
        match directives::parse(text) {
            Some((kind, directive)) => {
                self.push(kind, start, text).directive = Some(Box::new(directive));
            }
            None => {
                self.push(TokenKind::Comment, start, text);
            }
        }
    }

    fn doc_comment(&mut self, start: u32, text: &str, terminated: bool) {
        let mut at = 0usize;
        for (kind, len) in doc_comment::split(text, terminated) {
            let piece = &text[at..at + len];
            self.push(kind, start + len_u32(&text[..at]), piece);
            at += len;
        }
    }

    // ─── Identifiers ───────────────────────────────────────────

    /// Resolve an identifier to a keyword or a `T_STRING` name.
    ///
    /// Member names (`->class`), static members (`::class`), function and
    /// constant names (`function list`, `const IF`) and namespace segments
    /// are names even when they spell a keyword. `enum` is only a keyword
    /// when a name follows it.
    fn identifier(&self, index: usize, text: &str) -> TokenKind {
        if self.is_name_position() {
            return TokenKind::String;
        }
        match keywords::lookup(text) {
            Some(TokenKind::Enum) if !self.ident_follows(index) => TokenKind::String,
            Some(kind) => kind,
            None => TokenKind::String,
        }
    }

    fn is_name_position(&self) -> bool {
        let mut significant = self.tokens.iter().rev().filter(|t| !t.is_in(EMPTY_TOKENS));
        match significant.next().map(|t| t.kind) {
            Some(
                TokenKind::ObjectOperator
                | TokenKind::NullsafeObjectOperator
                | TokenKind::DoubleColon
                | TokenKind::Function
                | TokenKind::Const
                | TokenKind::NsSeparator,
            ) => true,
            Some(TokenKind::BitwiseAnd) => {
                significant.next().map(|t| t.kind) == Some(TokenKind::Function)
            }
            _ => false,
        }
    }

    /// Whether the next non-trivia raw token after `index` is an identifier.
    fn ident_follows(&self, index: usize) -> bool {
        self.raw[index + 1..]
            .iter()
            .find(|r| !r.tag.is_trivia())
            .is_some_and(|r| r.tag == RawTag::Ident)
    }
}

/// `T_DOUBLE_QUOTED_STRING` when the literal interpolates, else a constant
/// string.
fn double_quoted_kind(text: &str) -> TokenKind {
    let bytes = text.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'$' => {
                if bytes
                    .get(i + 1)
                    .is_some_and(|&b| b == b'{' || b == b'_' || b.is_ascii_alphabetic() || b >= 0x80)
                {
                    return TokenKind::DoubleQuotedString;
                }
            }
            b'{' if bytes.get(i + 1) == Some(&b'$') => return TokenKind::DoubleQuotedString,
            _ => {}
        }
        i += 1;
    }
    TokenKind::ConstantEncapsedString
}

/// Split `text` after each line break. `\r\n` is one break.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let end = match memchr::memchr2(b'\n', b'\r', &bytes[start..]) {
            Some(offset) => {
                let at = start + offset;
                if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
                    at + 2
                } else {
                    at + 1
                }
            }
            None => bytes.len(),
        };
        let line = &text[start..end];
        start = end;
        Some(line)
    })
}

#[inline]
fn len_u32(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
