//! Raw token tags.
//!
//! A `RawTag` says what a span of bytes is without interpreting it: no
//! keyword resolution, no doc-comment structure, no scope information.

/// Raw token kind produced by [`RawScanner`](crate::RawScanner).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // ─── Markup ────────────────────────────────────────────────
    /// Text outside PHP tags.
    InlineHtml,
    /// `<?php`
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>`
    CloseTag,

    // ─── Trivia ────────────────────────────────────────────────
    /// Spaces and tabs, optionally terminated by one line break.
    Whitespace,
    /// `// ...` or `# ...` up to (not including) the line break.
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// `/** ... */`
    DocComment,
    /// `/* ...` with no closing `*/`; runs to end of input.
    UnterminatedBlockComment,
    /// `/** ...` with no closing `*/`; runs to end of input.
    UnterminatedDocComment,

    // ─── Literals & Names ──────────────────────────────────────
    Ident,
    /// `$name`
    Variable,
    Int,
    Float,
    /// `'...'`
    SingleQuoted,
    /// `"..."`
    DoubleQuoted,
    /// `` `...` ``
    Backtick,
    /// A quoted literal with no closing quote; runs to end of input.
    UnterminatedString,
    /// `<<<LABEL` plus its line break.
    HeredocStart,
    /// Heredoc or nowdoc body lines.
    HeredocBody,
    /// Closing heredoc label.
    HeredocEnd,

    // ─── Delimiters ────────────────────────────────────────────
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
    Backslash,
    /// `#[`
    AttributeOpen,

    // ─── Operators ─────────────────────────────────────────────
    Colon,
    DoubleColon,
    Question,
    /// `?->`
    NullsafeArrow,
    /// `??`
    Coalesce,
    /// `??=`
    CoalesceEqual,
    /// `->`
    Arrow,
    /// `=>`
    DoubleArrow,
    Equal,
    EqualEqual,
    /// `===`
    Identical,
    /// `!=` or `<>`
    NotEqual,
    /// `!==`
    NotIdentical,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    /// `<=>`
    Spaceship,
    Plus,
    PlusEqual,
    Increment,
    Minus,
    MinusEqual,
    Decrement,
    Star,
    StarEqual,
    /// `**`
    Pow,
    PowEqual,
    Slash,
    SlashEqual,
    Percent,
    PercentEqual,
    Dot,
    DotEqual,
    /// `...`
    Ellipsis,
    Bang,
    Amp,
    AmpAmp,
    AmpEqual,
    Pipe,
    PipePipe,
    PipeEqual,
    Caret,
    CaretEqual,
    Tilde,
    ShiftLeft,
    ShiftLeftEqual,
    ShiftRight,
    ShiftRightEqual,
    At,
    Dollar,

    // ─── Control ───────────────────────────────────────────────
    /// A byte that starts no PHP token (control characters, interior nulls).
    Unknown,
    /// End of input. Always zero length.
    Eof,
}

impl RawTag {
    /// Fixed spelling for punctuation and operator tags.
    ///
    /// Returns `None` for tags whose text varies.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            RawTag::OpenTagWithEcho => "<?=",
            RawTag::CloseTag => "?>",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::Semicolon => ";",
            RawTag::Comma => ",",
            RawTag::Backslash => "\\",
            RawTag::AttributeOpen => "#[",
            RawTag::Colon => ":",
            RawTag::DoubleColon => "::",
            RawTag::Question => "?",
            RawTag::NullsafeArrow => "?->",
            RawTag::Coalesce => "??",
            RawTag::CoalesceEqual => "??=",
            RawTag::Arrow => "->",
            RawTag::DoubleArrow => "=>",
            RawTag::Equal => "=",
            RawTag::EqualEqual => "==",
            RawTag::Identical => "===",
            RawTag::NotIdentical => "!==",
            RawTag::Less => "<",
            RawTag::LessEqual => "<=",
            RawTag::Greater => ">",
            RawTag::GreaterEqual => ">=",
            RawTag::Spaceship => "<=>",
            RawTag::Plus => "+",
            RawTag::PlusEqual => "+=",
            RawTag::Increment => "++",
            RawTag::Minus => "-",
            RawTag::MinusEqual => "-=",
            RawTag::Decrement => "--",
            RawTag::Star => "*",
            RawTag::StarEqual => "*=",
            RawTag::Pow => "**",
            RawTag::PowEqual => "**=",
            RawTag::Slash => "/",
            RawTag::SlashEqual => "/=",
            RawTag::Percent => "%",
            RawTag::PercentEqual => "%=",
            RawTag::Dot => ".",
            RawTag::DotEqual => ".=",
            RawTag::Ellipsis => "...",
            RawTag::Bang => "!",
            RawTag::Amp => "&",
            RawTag::AmpAmp => "&&",
            RawTag::AmpEqual => "&=",
            RawTag::Pipe => "|",
            RawTag::PipePipe => "||",
            RawTag::PipeEqual => "|=",
            RawTag::Caret => "^",
            RawTag::CaretEqual => "^=",
            RawTag::Tilde => "~",
            RawTag::ShiftLeft => "<<",
            RawTag::ShiftLeftEqual => "<<=",
            RawTag::ShiftRight => ">>",
            RawTag::ShiftRightEqual => ">>=",
            RawTag::At => "@",
            RawTag::Dollar => "$",
            RawTag::Eof => "",
            _ => return None,
        };
        Some(text)
    }

    /// Whether the tag is whitespace or a comment.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace
                | RawTag::LineComment
                | RawTag::BlockComment
                | RawTag::DocComment
                | RawTag::UnterminatedBlockComment
                | RawTag::UnterminatedDocComment
        )
    }
}

/// A raw token: tag plus byte length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
