//! Declaration lookups for class-like and function tokens.

use super::{StoreError, TokenStore};
use crate::{TokenKind, EMPTY_TOKENS, NAME_TOKENS};

impl TokenStore {
    /// Declared name of a class, interface, trait, enum or function.
    ///
    /// Returns `Ok(None)` for anonymous classes and closures.
    pub fn declaration_name(&self, position: usize) -> Result<Option<&str>, StoreError> {
        let token = self.token(position)?;
        if !matches!(
            token.kind,
            TokenKind::Class
                | TokenKind::Interface
                | TokenKind::Trait
                | TokenKind::Enum
                | TokenKind::Function
        ) {
            return Err(StoreError::UnexpectedKind {
                position,
                found: token.kind,
                expected: "T_CLASS, T_INTERFACE, T_TRAIT, T_ENUM, T_FUNCTION",
            });
        }

        let mut next = self.next_non_empty(position + 1)?;
        if token.kind == TokenKind::Function {
            // `function &name()`
            if let Some(amp) = next.filter(|&i| self.tokens[i].kind == TokenKind::BitwiseAnd) {
                next = self.next_non_empty(amp + 1)?;
            }
        }
        Ok(next
            .map(|i| &self.tokens[i])
            .filter(|t| t.kind == TokenKind::String)
            .map(|t| t.content.as_str()))
    }

    /// Names listed in the `implements` clause of a class or enum.
    ///
    /// Names are returned as written, including any leading `\`. Returns
    /// `Ok(None)` when there is no `implements` clause.
    pub fn implemented_interface_names(
        &self,
        position: usize,
    ) -> Result<Option<Vec<String>>, StoreError> {
        let token = self.token(position)?;
        if !matches!(token.kind, TokenKind::Class | TokenKind::Enum) {
            return Err(StoreError::UnexpectedKind {
                position,
                found: token.kind,
                expected: "T_CLASS, T_ENUM",
            });
        }

        let limit = token.links.scope_opener.unwrap_or(self.eof());
        let Some(implements) =
            self.find_next(TokenKind::Implements, position + 1, Some(limit), false)?
        else {
            return Ok(None);
        };

        let mut names = Vec::new();
        let mut current = String::new();
        for token in &self.tokens[implements + 1..limit] {
            if NAME_TOKENS.contains(token.kind) {
                current.push_str(&token.content);
            } else if token.kind == TokenKind::Comma {
                if !current.is_empty() {
                    names.push(std::mem::take(&mut current));
                }
            } else if !EMPTY_TOKENS.contains(token.kind) {
                break;
            }
        }
        if !current.is_empty() {
            names.push(current);
        }
        Ok(if names.is_empty() { None } else { Some(names) })
    }

    /// Name in the `extends` clause of a class, if any.
    pub fn extended_class_name(&self, position: usize) -> Result<Option<String>, StoreError> {
        let token = self.token(position)?;
        if token.kind != TokenKind::Class {
            return Err(StoreError::UnexpectedKind {
                position,
                found: token.kind,
                expected: "T_CLASS",
            });
        }
        let limit = token.links.scope_opener.unwrap_or(self.eof());
        let Some(extends) = self.find_next(TokenKind::Extends, position + 1, Some(limit), false)?
        else {
            return Ok(None);
        };
        let name: String = self.tokens[extends + 1..limit]
            .iter()
            .skip_while(|t| EMPTY_TOKENS.contains(t.kind))
            .take_while(|t| NAME_TOKENS.contains(t.kind))
            .map(|t| t.content.as_str())
            .collect();
        Ok((!name.is_empty()).then_some(name))
    }
}
