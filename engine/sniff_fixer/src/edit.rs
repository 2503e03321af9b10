//! Primitive token edits.

use std::fmt;

/// One staged change to a token's content.
///
/// Edits address tokens by position in the store of the current pass. The
/// edits of a changeset are applied in the order they were staged, each to
/// the content left by the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Replace the token's content.
    Replace { position: usize, text: String },
    /// Prepend text to the token.
    InsertBefore { position: usize, text: String },
    /// Append text to the token.
    InsertAfter { position: usize, text: String },
    /// Empty the token.
    Delete { position: usize },
}

impl Edit {
    pub fn position(&self) -> usize {
        match *self {
            Edit::Replace { position, .. }
            | Edit::InsertBefore { position, .. }
            | Edit::InsertAfter { position, .. }
            | Edit::Delete { position } => position,
        }
    }

    /// Name used in error messages and traces.
    pub fn operation(&self) -> &'static str {
        match self {
            Edit::Replace { .. } => "replace",
            Edit::InsertBefore { .. } => "insert_before",
            Edit::InsertAfter { .. } => "insert_after",
            Edit::Delete { .. } => "delete",
        }
    }

    /// Content of the token after this edit, given its content before.
    pub fn apply_to(&self, current: &str) -> String {
        match self {
            Edit::Replace { text, .. } => text.clone(),
            Edit::InsertBefore { text, .. } => {
                let mut out = String::with_capacity(text.len() + current.len());
                out.push_str(text);
                out.push_str(current);
                out
            }
            Edit::InsertAfter { text, .. } => {
                let mut out = String::with_capacity(current.len() + text.len());
                out.push_str(current);
                out.push_str(text);
                out
            }
            Edit::Delete { .. } => String::new(),
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Replace { position, text }
            | Edit::InsertBefore { position, text }
            | Edit::InsertAfter { position, text } => {
                write!(f, "{}({position}, {text:?})", self.operation())
            }
            Edit::Delete { position } => write!(f, "delete({position})"),
        }
    }
}
