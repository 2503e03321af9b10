//! Token kinds for PHP source.
//!
//! Names follow the `T_*` vocabulary rule modules are written against, so a
//! token dump reads the same as the kinds a rule registers for.

use std::fmt;

macro_rules! token_kinds {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $name:literal,
    )*) => {
        /// Cooked token kind.
        ///
        /// Fieldless and `repr(u8)` so a kind fits in a [`TokenSet`](crate::TokenSet)
        /// bit and compares in one instruction.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum TokenKind {
            $( $(#[$meta])* $variant, )*
        }

        impl TokenKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[ $( TokenKind::$variant, )* ];

            /// The `T_*` name of this kind.
            pub const fn name(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $name, )*
                }
            }

            /// Look a kind up by its `T_*` name.
            pub fn from_name(name: &str) -> Option<TokenKind> {
                match name {
                    $( $name => Some(TokenKind::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    // ─── Markup ────────────────────────────────────────────────
    OpenTag => "T_OPEN_TAG",
    OpenTagWithEcho => "T_OPEN_TAG_WITH_ECHO",
    CloseTag => "T_CLOSE_TAG",
    InlineHtml => "T_INLINE_HTML",

    // ─── Trivia ────────────────────────────────────────────────
    Whitespace => "T_WHITESPACE",
    /// Line comment, or one line of a block comment.
    Comment => "T_COMMENT",
    DocCommentOpenTag => "T_DOC_COMMENT_OPEN_TAG",
    DocCommentWhitespace => "T_DOC_COMMENT_WHITESPACE",
    DocCommentStar => "T_DOC_COMMENT_STAR",
    DocCommentString => "T_DOC_COMMENT_STRING",
    /// `@tag` inside a doc comment.
    DocCommentTag => "T_DOC_COMMENT_TAG",
    DocCommentCloseTag => "T_DOC_COMMENT_CLOSE_TAG",
    PhpcsDisable => "T_PHPCS_DISABLE",
    PhpcsEnable => "T_PHPCS_ENABLE",
    PhpcsIgnore => "T_PHPCS_IGNORE",
    PhpcsIgnoreFile => "T_PHPCS_IGNORE_FILE",

    // ─── Literals & Names ──────────────────────────────────────
    Variable => "T_VARIABLE",
    /// Integer literal.
    LNumber => "T_LNUMBER",
    /// Float literal.
    DNumber => "T_DNUMBER",
    /// Single-quoted string, or double-quoted without interpolation.
    ConstantEncapsedString => "T_CONSTANT_ENCAPSED_STRING",
    /// Double-quoted string containing `$` interpolation.
    DoubleQuotedString => "T_DOUBLE_QUOTED_STRING",
    Backtick => "T_BACKTICK",
    StartHeredoc => "T_START_HEREDOC",
    StartNowdoc => "T_START_NOWDOC",
    Heredoc => "T_HEREDOC",
    Nowdoc => "T_NOWDOC",
    EndHeredoc => "T_END_HEREDOC",
    EndNowdoc => "T_END_NOWDOC",
    /// Identifier: class, function, constant or directive name.
    String => "T_STRING",
    NsSeparator => "T_NS_SEPARATOR",
    /// `#[`
    Attribute => "T_ATTRIBUTE",

    // ─── Brackets ──────────────────────────────────────────────
    OpenParenthesis => "T_OPEN_PARENTHESIS",
    CloseParenthesis => "T_CLOSE_PARENTHESIS",
    OpenSquareBracket => "T_OPEN_SQUARE_BRACKET",
    CloseSquareBracket => "T_CLOSE_SQUARE_BRACKET",
    OpenCurlyBracket => "T_OPEN_CURLY_BRACKET",
    CloseCurlyBracket => "T_CLOSE_CURLY_BRACKET",

    // ─── Punctuation ───────────────────────────────────────────
    Semicolon => "T_SEMICOLON",
    Comma => "T_COMMA",
    Colon => "T_COLON",
    DoubleColon => "T_DOUBLE_COLON",
    /// `?`
    InlineThen => "T_INLINE_THEN",
    /// `->`
    ObjectOperator => "T_OBJECT_OPERATOR",
    /// `?->`
    NullsafeObjectOperator => "T_NULLSAFE_OBJECT_OPERATOR",
    /// `=>`
    DoubleArrow => "T_DOUBLE_ARROW",
    Ellipsis => "T_ELLIPSIS",
    /// `@`
    Asperand => "T_ASPERAND",
    Dollar => "T_DOLLAR",

    // ─── Operators ─────────────────────────────────────────────
    Equal => "T_EQUAL",
    IsEqual => "T_IS_EQUAL",
    IsIdentical => "T_IS_IDENTICAL",
    IsNotEqual => "T_IS_NOT_EQUAL",
    IsNotIdentical => "T_IS_NOT_IDENTICAL",
    LessThan => "T_LESS_THAN",
    GreaterThan => "T_GREATER_THAN",
    IsSmallerOrEqual => "T_IS_SMALLER_OR_EQUAL",
    IsGreaterOrEqual => "T_IS_GREATER_OR_EQUAL",
    Spaceship => "T_SPACESHIP",
    Plus => "T_PLUS",
    Minus => "T_MINUS",
    Multiply => "T_MULTIPLY",
    Divide => "T_DIVIDE",
    Modulus => "T_MODULUS",
    Pow => "T_POW",
    /// `.`
    StringConcat => "T_STRING_CONCAT",
    PlusEqual => "T_PLUS_EQUAL",
    MinusEqual => "T_MINUS_EQUAL",
    MulEqual => "T_MUL_EQUAL",
    DivEqual => "T_DIV_EQUAL",
    ModEqual => "T_MOD_EQUAL",
    PowEqual => "T_POW_EQUAL",
    ConcatEqual => "T_CONCAT_EQUAL",
    Inc => "T_INC",
    Dec => "T_DEC",
    BooleanAnd => "T_BOOLEAN_AND",
    BooleanOr => "T_BOOLEAN_OR",
    BooleanNot => "T_BOOLEAN_NOT",
    BitwiseAnd => "T_BITWISE_AND",
    BitwiseOr => "T_BITWISE_OR",
    BitwiseXor => "T_BITWISE_XOR",
    BitwiseNot => "T_BITWISE_NOT",
    AndEqual => "T_AND_EQUAL",
    OrEqual => "T_OR_EQUAL",
    XorEqual => "T_XOR_EQUAL",
    /// `<<`
    Sl => "T_SL",
    /// `>>`
    Sr => "T_SR",
    SlEqual => "T_SL_EQUAL",
    SrEqual => "T_SR_EQUAL",
    Coalesce => "T_COALESCE",
    CoalesceEqual => "T_COALESCE_EQUAL",

    // ─── Keywords ──────────────────────────────────────────────
    Abstract => "T_ABSTRACT",
    Array => "T_ARRAY",
    As => "T_AS",
    Break => "T_BREAK",
    Callable => "T_CALLABLE",
    Case => "T_CASE",
    Catch => "T_CATCH",
    Class => "T_CLASS",
    Clone => "T_CLONE",
    Const => "T_CONST",
    Continue => "T_CONTINUE",
    Declare => "T_DECLARE",
    Default => "T_DEFAULT",
    Do => "T_DO",
    Echo => "T_ECHO",
    Else => "T_ELSE",
    Elseif => "T_ELSEIF",
    Empty => "T_EMPTY",
    Enddeclare => "T_ENDDECLARE",
    Endfor => "T_ENDFOR",
    Endforeach => "T_ENDFOREACH",
    Endif => "T_ENDIF",
    Endswitch => "T_ENDSWITCH",
    Endwhile => "T_ENDWHILE",
    Enum => "T_ENUM",
    Eval => "T_EVAL",
    Exit => "T_EXIT",
    Extends => "T_EXTENDS",
    False => "T_FALSE",
    Final => "T_FINAL",
    Finally => "T_FINALLY",
    Fn => "T_FN",
    For => "T_FOR",
    Foreach => "T_FOREACH",
    Function => "T_FUNCTION",
    Global => "T_GLOBAL",
    Goto => "T_GOTO",
    If => "T_IF",
    Implements => "T_IMPLEMENTS",
    Include => "T_INCLUDE",
    IncludeOnce => "T_INCLUDE_ONCE",
    Instanceof => "T_INSTANCEOF",
    Insteadof => "T_INSTEADOF",
    Interface => "T_INTERFACE",
    Isset => "T_ISSET",
    List => "T_LIST",
    /// `and`
    LogicalAnd => "T_LOGICAL_AND",
    /// `or`
    LogicalOr => "T_LOGICAL_OR",
    /// `xor`
    LogicalXor => "T_LOGICAL_XOR",
    Match => "T_MATCH",
    Namespace => "T_NAMESPACE",
    New => "T_NEW",
    Null => "T_NULL",
    Parent => "T_PARENT",
    Print => "T_PRINT",
    Private => "T_PRIVATE",
    Protected => "T_PROTECTED",
    Public => "T_PUBLIC",
    Readonly => "T_READONLY",
    Require => "T_REQUIRE",
    RequireOnce => "T_REQUIRE_ONCE",
    Return => "T_RETURN",
    SelfKw => "T_SELF",
    Static => "T_STATIC",
    Switch => "T_SWITCH",
    Throw => "T_THROW",
    Trait => "T_TRAIT",
    True => "T_TRUE",
    Try => "T_TRY",
    Unset => "T_UNSET",
    Use => "T_USE",
    Var => "T_VAR",
    While => "T_WHILE",
    Yield => "T_YIELD",

    // ─── Control ───────────────────────────────────────────────
    /// A byte that starts no PHP token.
    Unknown => "T_UNKNOWN",
    /// Zero-width end-of-input marker. Always the last token.
    Eof => "T_EOF",
}

impl TokenKind {
    /// Bit index of this kind in a [`TokenSet`](crate::TokenSet).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this kind opens a paired group: `(`, `[` or `{`.
    #[inline]
    pub const fn is_opener(self) -> bool {
        matches!(
            self,
            TokenKind::OpenParenthesis | TokenKind::OpenSquareBracket | TokenKind::OpenCurlyBracket
        )
    }

    /// Whether this kind closes a paired group: `)`, `]` or `}`.
    #[inline]
    pub const fn is_closer(self) -> bool {
        matches!(
            self,
            TokenKind::CloseParenthesis
                | TokenKind::CloseSquareBracket
                | TokenKind::CloseCurlyBracket
        )
    }

    /// The closer matching an opener, if this is an opener.
    pub const fn matching_closer(self) -> Option<TokenKind> {
        match self {
            TokenKind::OpenParenthesis => Some(TokenKind::CloseParenthesis),
            TokenKind::OpenSquareBracket => Some(TokenKind::CloseSquareBracket),
            TokenKind::OpenCurlyBracket => Some(TokenKind::CloseCurlyBracket),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
