//! The BigBite coding standard.
//!
//! [`BUILTIN`] and [`standard`] also cover the documentation rules from
//! [`bigbite_docs`](crate::bigbite_docs).

mod declare_statement;
mod doc_comment_line_length;
mod file_name;
mod heredoc;
mod object_braces;
mod stringable;

pub use declare_statement::DeclareStatement;
pub use doc_comment_line_length::DocCommentLineLength;
pub use file_name::FileName;
pub use heredoc::Heredoc;
pub use object_braces::{NewLineAfterOpeningBrace, NewLineBeforeClosingBrace};
pub use stringable::Stringable;

use crate::bigbite_docs::FunctionComment;
use crate::{OptionError, Sniff, SniffOptions, SniffRegistry};

/// Codes of every built-in rule module, in registration order.
pub const BUILTIN: &[&str] = &[
    DocCommentLineLength::CODE,
    DeclareStatement::CODE,
    FileName::CODE,
    NewLineAfterOpeningBrace::CODE,
    NewLineBeforeClosingBrace::CODE,
    Heredoc::CODE,
    Stringable::CODE,
    FunctionComment::CODE,
];

/// Build a built-in rule module by code.
///
/// Returns `Ok(None)` for an unknown code.
pub fn builtin(code: &str, options: &SniffOptions) -> Result<Option<Box<dyn Sniff>>, OptionError> {
    let sniff: Box<dyn Sniff> = match code {
        DocCommentLineLength::CODE => Box::new(DocCommentLineLength::from_options(options)?),
        DeclareStatement::CODE => Box::new(DeclareStatement::from_options(options)?),
        FileName::CODE => Box::new(FileName::from_options(options)?),
        NewLineAfterOpeningBrace::CODE => {
            options.expect_keys(&[])?;
            Box::new(NewLineAfterOpeningBrace)
        }
        NewLineBeforeClosingBrace::CODE => {
            options.expect_keys(&[])?;
            Box::new(NewLineBeforeClosingBrace)
        }
        Heredoc::CODE => {
            options.expect_keys(&[])?;
            Box::new(Heredoc)
        }
        Stringable::CODE => {
            options.expect_keys(&[])?;
            Box::new(Stringable)
        }
        FunctionComment::CODE => Box::new(FunctionComment::from_options(options)?),
        _ => return Ok(None),
    };
    Ok(Some(sniff))
}

/// Every built-in rule module with default options.
pub fn standard() -> SniffRegistry {
    let mut registry = SniffRegistry::new();
    registry.register(Box::new(DocCommentLineLength::default()));
    registry.register(Box::new(DeclareStatement::default()));
    registry.register(Box::new(FileName::default()));
    registry.register(Box::new(NewLineAfterOpeningBrace));
    registry.register(Box::new(NewLineBeforeClosingBrace));
    registry.register(Box::new(Heredoc));
    registry.register(Box::new(Stringable));
    registry.register(Box::new(FunctionComment::default()));
    registry
}
