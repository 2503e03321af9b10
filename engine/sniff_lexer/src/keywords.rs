//! Keyword resolution.
//!
//! PHP keywords are case-insensitive. The lookup lowercases into a small
//! stack buffer, then uses the identifier's length as a first-pass filter
//! (keywords range from 2 to 12 bytes) before matching the keywords of that
//! length.

use sniff_ir::TokenKind;

/// Longest keyword: `include_once` / `require_once`.
const MAX_KEYWORD_LEN: usize = 12;

/// Look up a reserved word by text, ignoring ASCII case.
///
/// Returns `None` for ordinary identifiers.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if !(2..=MAX_KEYWORD_LEN).contains(&len) || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    buf[..len].copy_from_slice(bytes);
    buf[..len].make_ascii_lowercase();
    let lower = std::str::from_utf8(&buf[..len]).ok()?;

    match len {
        2 => match lower {
            "as" => Some(TokenKind::As),
            "do" => Some(TokenKind::Do),
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::LogicalOr),
            _ => None,
        },
        3 => match lower {
            "and" => Some(TokenKind::LogicalAnd),
            "die" => Some(TokenKind::Exit),
            "for" => Some(TokenKind::For),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            "use" => Some(TokenKind::Use),
            "var" => Some(TokenKind::Var),
            "xor" => Some(TokenKind::LogicalXor),
            _ => None,
        },
        4 => match lower {
            "case" => Some(TokenKind::Case),
            "echo" => Some(TokenKind::Echo),
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "eval" => Some(TokenKind::Eval),
            "exit" => Some(TokenKind::Exit),
            "goto" => Some(TokenKind::Goto),
            "list" => Some(TokenKind::List),
            "null" => Some(TokenKind::Null),
            "self" => Some(TokenKind::SelfKw),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match lower {
            "array" => Some(TokenKind::Array),
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "class" => Some(TokenKind::Class),
            "clone" => Some(TokenKind::Clone),
            "const" => Some(TokenKind::Const),
            "empty" => Some(TokenKind::Empty),
            "endif" => Some(TokenKind::Endif),
            "false" => Some(TokenKind::False),
            "final" => Some(TokenKind::Final),
            "isset" => Some(TokenKind::Isset),
            "match" => Some(TokenKind::Match),
            "print" => Some(TokenKind::Print),
            "throw" => Some(TokenKind::Throw),
            "trait" => Some(TokenKind::Trait),
            "unset" => Some(TokenKind::Unset),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match lower {
            "elseif" => Some(TokenKind::Elseif),
            "endfor" => Some(TokenKind::Endfor),
            "global" => Some(TokenKind::Global),
            "parent" => Some(TokenKind::Parent),
            "public" => Some(TokenKind::Public),
            "return" => Some(TokenKind::Return),
            "static" => Some(TokenKind::Static),
            "switch" => Some(TokenKind::Switch),
            _ => None,
        },
        7 => match lower {
            "declare" => Some(TokenKind::Declare),
            "default" => Some(TokenKind::Default),
            "extends" => Some(TokenKind::Extends),
            "finally" => Some(TokenKind::Finally),
            "foreach" => Some(TokenKind::Foreach),
            "include" => Some(TokenKind::Include),
            "private" => Some(TokenKind::Private),
            "require" => Some(TokenKind::Require),
            _ => None,
        },
        8 => match lower {
            "abstract" => Some(TokenKind::Abstract),
            "callable" => Some(TokenKind::Callable),
            "continue" => Some(TokenKind::Continue),
            "endwhile" => Some(TokenKind::Endwhile),
            "function" => Some(TokenKind::Function),
            "readonly" => Some(TokenKind::Readonly),
            _ => None,
        },
        9 => match lower {
            "endswitch" => Some(TokenKind::Endswitch),
            "insteadof" => Some(TokenKind::Insteadof),
            "interface" => Some(TokenKind::Interface),
            "namespace" => Some(TokenKind::Namespace),
            "protected" => Some(TokenKind::Protected),
            _ => None,
        },
        10 => match lower {
            "enddeclare" => Some(TokenKind::Enddeclare),
            "endforeach" => Some(TokenKind::Endforeach),
            "implements" => Some(TokenKind::Implements),
            "instanceof" => Some(TokenKind::Instanceof),
            _ => None,
        },
        12 => match lower {
            "include_once" => Some(TokenKind::IncludeOnce),
            "require_once" => Some(TokenKind::RequireOnce),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
