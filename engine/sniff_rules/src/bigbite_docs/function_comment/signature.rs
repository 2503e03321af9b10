//! Parameters of a function declaration.

use sniff_ir::{StoreError, TokenKind, TokenStore};

/// One declared parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct Parameter {
    /// Variable name with its `$`; variadic parameters are prefixed with `...`.
    pub name: String,
    /// Type declaration as written, without whitespace. Empty when untyped.
    pub type_hint: String,
    pub by_reference: bool,
}

/// Declared parameters of the function at `function`, in order.
///
/// Attributes and promotion modifiers are skipped; default values are
/// ignored.
pub(super) fn method_parameters(
    store: &TokenStore,
    function: usize,
) -> Result<Vec<Parameter>, StoreError> {
    let token = store.token(function)?;
    let (Some(opener), Some(closer)) = (
        token.links.parenthesis_opener,
        token.links.parenthesis_closer,
    ) else {
        return Ok(Vec::new());
    };
    let depth = store.token(opener)?.level + 1;

    let mut parameters = Vec::new();
    let mut current = Parameter::default();
    let mut variadic = false;
    let mut named = false;
    let mut i = opener + 1;
    while i < closer {
        let token = store.token(i)?;
        if token.kind == TokenKind::Comma && token.level == depth {
            if named {
                parameters.push(std::mem::take(&mut current));
            }
            current = Parameter::default();
            variadic = false;
            named = false;
            i += 1;
            continue;
        }
        if named || token.is_empty_token() {
            i += 1;
            continue;
        }
        match token.kind {
            TokenKind::Attribute => {
                i = token.links.bracket_closer.unwrap_or(i);
            }
            TokenKind::Public | TokenKind::Protected | TokenKind::Private | TokenKind::Readonly => {}
            TokenKind::Ellipsis => variadic = true,
            TokenKind::BitwiseAnd if passes_by_reference(store, i)? => current.by_reference = true,
            TokenKind::Variable => {
                current.name = if variadic {
                    format!("...{}", token.content)
                } else {
                    token.content.clone()
                };
                named = true;
            }
            _ => current.type_hint.push_str(&token.content),
        }
        i += 1;
    }
    if named {
        parameters.push(current);
    }
    Ok(parameters)
}

/// Whether the `&` at `amp` marks a by-reference parameter rather than an
/// intersection type.
fn passes_by_reference(store: &TokenStore, amp: usize) -> Result<bool, StoreError> {
    let Some(next) = store.next_non_empty(amp + 1)? else {
        return Ok(false);
    };
    Ok(matches!(
        store.kind(next)?,
        TokenKind::Variable | TokenKind::Ellipsis
    ))
}
